//! Player module - decoder for per-player `update` lines

use tracing::warn;

use crate::core::game::{GameState, PlayerState};
use crate::protocol::dispatch::{Args, CommandHandler, CommandTable, Handler};

/// Decodes `update <name> <setting> <value>` lines for one roster slot.
///
/// One decoder is registered per player once the roster is built, each
/// bound to the player's index.
pub struct PlayerDecoder {
    index: usize,
    table: CommandTable<PlayerState>,
}

impl PlayerDecoder {
    pub fn new(index: usize) -> Self {
        let mut table = CommandTable::new();
        table.register("row_points", Handler::Fn(set_row_points));
        table.register("combo", Handler::Fn(set_combo));
        table.register("field", Handler::Fn(set_field));
        Self { index, table }
    }
}

impl CommandHandler<GameState> for PlayerDecoder {
    fn handle(&mut self, game: &mut GameState, args: &mut Args<'_>) {
        let Some(param) = args.next_token() else {
            warn!("player update with no parameter");
            return;
        };
        let Some(player) = game.player_mut(self.index) else {
            warn!(index = self.index, "player update for a missing roster slot");
            return;
        };
        if !self.table.dispatch(param, player, args) {
            warn!(
                player = player.name(),
                setting = param,
                rest = args.rest(),
                "unknown player setting"
            );
        }
    }
}

fn set_row_points(player: &mut PlayerState, args: &mut Args<'_>) {
    match args.next_i32() {
        Some(points) => player.row_points = points,
        None => warn!("row_points update with no number"),
    }
}

fn set_combo(player: &mut PlayerState, args: &mut Args<'_>) {
    match args.next_i32() {
        Some(combo) => player.combo = combo,
        None => warn!("combo update with no number"),
    }
}

/// Rows are `;`-separated, cells `,`-separated. Only cells that read as
/// exactly 1 count as filled.
fn set_field(player: &mut PlayerState, args: &mut Args<'_>) {
    let mut rows = Vec::new();
    match args.next_token() {
        Some(data) => {
            for line in data.split_terminator(';') {
                let row: Vec<i32> = line
                    .split_terminator(',')
                    .map(|cell| match cell.parse::<i32>() {
                        Ok(1) => 1,
                        _ => 0,
                    })
                    .collect();
                rows.push(row);
            }
        }
        None => warn!("field update with no cell data"),
    }
    player.field.replace_rows(rows);
}
