//! Logger initialisation for the chart binaries.

use anyhow::{Result, anyhow};

/// Installs `env_logger` at `info` level unless `RUST_LOG` says otherwise.
pub fn init() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logger: {}", e))
}
