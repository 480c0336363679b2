//! Block Battle bot entrypoint.
//!
//! Engine commands arrive on stdin and move lines leave on stdout, so
//! all diagnostics go to stderr. With `BLOCKBOT_DEBUG` set the debug
//! command set is active and an optional first argument names a replay
//! file to read instead of stdin.

use std::fs::File;
use std::io::{self, BufReader};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use blockbattle_bot::bot::Bot;
use blockbattle_bot::config::BotConfig;
use blockbattle_bot::strategy::RandomStrategy;

fn main() -> Result<()> {
    // stdout is the wire; logging must stay on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = BotConfig::from_env();
    let seed = config.seed.unwrap_or_else(clock_seed);

    let mut bot = Bot::new(io::stdout());
    bot.set_strategy(Box::new(RandomStrategy::new(seed)));
    bot.load_standard_pieces()?;
    if config.debug {
        bot.register_debug_commands();
    }

    match std::env::args().nth(1) {
        Some(path) if config.debug => {
            let file = File::open(&path).with_context(|| format!("opening replay file {path}"))?;
            bot.run(BufReader::new(file))
        }
        _ => bot.run(io::stdin().lock()),
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or(1)
}
