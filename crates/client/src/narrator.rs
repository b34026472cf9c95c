//! Prints bus events as plain text lines.

use std::collections::HashMap;

use game_core::EnemyStepKind;
use runtime::{AnimationEvent, Event, Topic};
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinSet;

/// Forwards every subscribed topic to stdout until the runtime shuts down.
pub async fn narrate(receivers: HashMap<Topic, broadcast::Receiver<Event>>) {
    let mut tasks = JoinSet::new();
    for (topic, receiver) in receivers {
        tasks.spawn(follow(topic, receiver));
    }
    while tasks.join_next().await.is_some() {}
}

async fn follow(topic: Topic, mut receiver: broadcast::Receiver<Event>) {
    loop {
        match receiver.recv().await {
            Ok(event) => {
                if let Some(line) = describe(&event) {
                    println!("{line}");
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(?topic, skipped, "narrator fell behind");
            }
            Err(RecvError::Closed) => break,
        }
    }
}

fn describe(event: &Event) -> Option<String> {
    match event {
        Event::Log(entry) => Some(format!("  [{}] {}", entry.kind, entry.message)),
        Event::Phase(change) => Some(format!(
            "== floor {} turn {}: {} -> {}",
            change.floor, change.turn, change.from, change.to
        )),
        Event::Animation(AnimationEvent::PlayerMoved { path }) => {
            Some(format!("  player walks {} hexes", path.len().saturating_sub(1)))
        }
        Event::Animation(AnimationEvent::EnemyStep(step)) => match step.kind {
            EnemyStepKind::Attacked {
                hp_loss, player_hp, ..
            } => Some(format!("  {} hits for {hp_loss} ({player_hp} HP left)", step.enemy)),
            EnemyStepKind::Moved { to, .. } => Some(format!("  {} steps to {to}", step.enemy)),
            _ => None,
        },
        Event::Animation(AnimationEvent::EnemyTurnFinished { .. }) | Event::Command(_) => None,
    }
}
