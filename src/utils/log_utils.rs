use crate::models::Config;
use anyhow::{anyhow, Context, Result};
use std::str::FromStr;
use tracing_subscriber::filter::LevelFilter;

/// Installs the process logger. A log4rs file wins when configured, otherwise
/// a tracing fmt subscriber that also picks up `log` records.
pub fn init_logging(config: &Config) -> Result<()> {
    if let Some(path) = &config.log4rs_config {
        log4rs::init_file(path, Default::default())
            .with_context(|| format!("failed to load log4rs config from {}", path))?;
        log::info!("logging configured from {}", path);
        return Ok(());
    }

    let level = LevelFilter::from_str(&config.log_level)
        .with_context(|| format!("invalid LOG_LEVEL {}", config.log_level))?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!("failed to install subscriber: {}", e))?;
    Ok(())
}
