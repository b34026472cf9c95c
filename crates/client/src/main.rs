//! Headless hexcrawl client.
//!
//! Boots the runtime with the bundled (or `HEXCRAWL_DATA_DIR`) content, lets
//! the autopilot play a full run and narrates it from the event bus.
//!
//! ```bash
//! HEXCRAWL_CLASS=mage HEXCRAWL_SEED=42 HEXCRAWL_STEP_DELAY_MS=0 cargo run -p hexcrawl-client
//! ```

mod config;
mod logging;
mod narrator;

use anyhow::{Context, Result};
use game_content::ContentFactory;
use runtime::{AutopilotProvider, Runtime, RuntimeConfig, Topic};

use crate::config::ClientConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let client_config = ClientConfig::from_env()?;
    let _guard = logging::setup_logging(client_config.log_dir.as_deref())?;

    let factory = match &client_config.data_dir {
        Some(dir) => ContentFactory::new(dir),
        None => ContentFactory::bundled(),
    };
    let mut runtime_config = RuntimeConfig::from_env().context("reading runtime settings")?;
    if std::env::var_os(RuntimeConfig::ENV_CONFIG).is_none() {
        runtime_config.game_config = factory.load_config()?;
    }
    let catalog = factory.load_catalog()?;
    game_content::loaders::validate_spawns(catalog.floors(), &runtime_config.game_config)?;

    tracing::info!(
        class = %client_config.class,
        data_dir = %factory.data_dir().display(),
        seed = ?runtime_config.rng_seed,
        "starting run"
    );

    let runtime = Runtime::builder()
        .config(runtime_config)
        .catalog(catalog)
        .build();

    let handle = runtime.handle();
    let mut topics = vec![Topic::Phase, Topic::Animation];
    if client_config.verbose {
        topics.push(Topic::Log);
    }
    let narrator = tokio::spawn(narrator::narrate(handle.subscribe_multiple(&topics)));

    let autopilot = AutopilotProvider::new(client_config.class);
    let state = runtime.run(&autopilot).await?;
    drop(handle);
    runtime.shutdown().await?;
    narrator.await?;

    let stats = state.stats();
    println!(
        "{} on floor {} turn {} ({} cards in deck, {} enemies left)",
        state.phase, stats.floor, stats.turn, stats.deck_size, stats.enemies_remaining
    );
    Ok(())
}
