//! Config module - environment-driven runtime options

use std::env;

/// Runtime options, read once at startup.
#[derive(Debug, Clone, Default)]
pub struct BotConfig {
    /// `BLOCKBOT_DEBUG`: enable the debug command set and replay files.
    pub debug: bool,
    /// `BLOCKBOT_SEED`: fixed seed for the random strategy.
    pub seed: Option<u32>,
}

impl BotConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        let debug = env::var("BLOCKBOT_DEBUG")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let seed = env::var("BLOCKBOT_SEED").ok().and_then(|s| s.parse().ok());

        Self { debug, seed }
    }
}
