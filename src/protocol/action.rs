//! Action module - handler for the engine's move requests

use std::io::Write;

use tracing::{debug, warn};

use crate::bot::Session;
use crate::protocol::dispatch::Args;

/// Handles `action moves <time>` by asking the installed strategy for a
/// move line. Other action payloads are logged and skipped.
pub fn handle_action<W: Write>(session: &mut Session<W>, args: &mut Args<'_>) {
    let Some(what) = args.next_token() else {
        warn!("action request with no payload");
        return;
    };
    if what != "moves" {
        warn!(action = what, rest = args.rest(), "unknown action request");
        return;
    }
    let time_left = args.next_i32().unwrap_or(0);
    let Session {
        game,
        strategy,
        writer,
        ..
    } = session;
    match strategy.as_mut() {
        Some(strategy) => {
            if let Err(err) = strategy.make_moves(game, time_left, writer) {
                warn!(err = %err, "failed to write moves");
            }
        }
        None => debug!("action request ignored, no strategy installed"),
    }
}
