//! Block absorption and HP loss.

/// Result of one damage application against a block pool and HP.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageOutcome {
    /// Damage soaked by block.
    pub blocked: u32,
    /// Damage that went through to HP (before clamping at zero).
    pub hp_loss: u32,
    pub remaining_block: u32,
    pub remaining_hp: u32,
}

impl DamageOutcome {
    pub const fn is_lethal(&self) -> bool {
        self.remaining_hp == 0
    }
}

/// Applies `damage` to a target: block absorbs first 1:1, the rest reduces HP.
///
/// ```text
/// block' = max(0, block - damage)
/// hp'    = max(0, hp - max(0, damage - block))
/// ```
pub fn absorb(block: u32, hp: u32, damage: u32) -> DamageOutcome {
    let blocked = damage.min(block);
    let hp_loss = damage - blocked;
    DamageOutcome {
        blocked,
        hp_loss,
        remaining_block: block - blocked,
        remaining_hp: hp.saturating_sub(hp_loss),
    }
}
