//! Egg Timer - A single-screen desktop countdown with a boiling egg
//! 
//! This is the main entry point for the egg-timer application.

use tracing::info;

use egg_timer::{config::Config, ui};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("egg_timer={}", config.log_level()))
        .init();

    info!("Starting egg-timer v1.0.0");
    info!("Configuration: fps={}, on_invalid={:?}, duration={:?}",
          config.fps, config.on_invalid, config.initial_input());

    if let Err(e) = ui::run(config)
        .map_err(|e| anyhow::anyhow!("failed to create the timer window: {}", e)) {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }

    info!("Window closed, exiting");
    Ok(())
}
