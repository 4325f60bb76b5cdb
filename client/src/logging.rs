use std::{fs::File, sync::Mutex};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

const DEFAULT_FILTER: &str = "libgame=info,termlife=info";

/// Sends logs to the configured file. The terminal belongs to the game, so without a
/// file no subscriber is installed at all.
pub fn init(config: &Config) -> anyhow::Result<()> {
    let Some(path) = config.log_file() else {
        return Ok(());
    };

    let file = File::create(&path)
        .with_context(|| format!("Creating log file {}", path.display()))?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let directives = config.log_filter.as_deref().unwrap_or(DEFAULT_FILTER);
            EnvFilter::try_new(directives)
                .with_context(|| format!("Parsing log filter {directives:?}"))?
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Installing log subscriber: {e}"))?;

    tracing::info!(path = %path.display(), "logging started");
    Ok(())
}
