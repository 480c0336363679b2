//! Update module - entity router for `update <entity> ...` lines

use std::io::Write;

use tracing::warn;

use crate::bot::Session;
use crate::core::game::GameState;
use crate::protocol::dispatch::{Args, CommandHandler, CommandTable, Handler};
use crate::protocol::player::PlayerDecoder;
use crate::protocol::round::RoundDecoder;

/// Routes `update` lines to the round decoder or to a player decoder.
///
/// Player routes are not known up front; they are registered once, when
/// the first update arrives after the roster names have been announced.
pub struct UpdateDecoder {
    table: CommandTable<GameState>,
}

impl UpdateDecoder {
    pub fn new() -> Self {
        let mut table = CommandTable::new();
        table.register("game", Handler::Scoped(Box::new(RoundDecoder::new())));
        Self { table }
    }
}

impl Default for UpdateDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> CommandHandler<Session<W>> for UpdateDecoder {
    fn handle(&mut self, session: &mut Session<W>, args: &mut Args<'_>) {
        if session.game.init_roster() {
            if session.game.players().is_empty() {
                warn!("update before player_names; the game has no players");
            }
            for (index, player) in session.game.players().iter().enumerate() {
                self.table
                    .register(player.name(), Handler::Scoped(Box::new(PlayerDecoder::new(index))));
            }
        }
        let Some(entity) = args.next_token() else {
            warn!("update line with no entity");
            return;
        };
        if !self.table.dispatch(entity, &mut session.game, args) {
            warn!(entity, rest = args.rest(), "unknown entity setting");
        }
    }
}
