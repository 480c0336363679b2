//! Settings module - decoder for the global `settings` vocabulary
//!
//! Scalars land directly in `Settings`; `player_names` replaces the name
//! list wholesale; `piece` runs the structured grid parse. Rotations with
//! the wrong amount of data are dropped one by one, so one bad rotation
//! never costs the whole piece.

use std::io::Write;

use tracing::warn;

use crate::bot::Session;
use crate::core::game::Settings;
use crate::core::shape::{Piece, Shape};
use crate::protocol::dispatch::{Args, CommandHandler, CommandTable, Handler};

/// Decodes `settings <name> <value>` lines.
pub struct SettingsDecoder {
    table: CommandTable<Settings>,
}

impl SettingsDecoder {
    pub fn new() -> Self {
        let mut table = CommandTable::new();
        table.register("time_bank", Handler::Fn(set_time_bank));
        // Alias used by older engine versions.
        table.register("timebank", Handler::Fn(set_time_bank));
        table.register("time_per_move", Handler::Fn(set_time_per_move));
        table.register("field_height", Handler::Fn(set_field_height));
        table.register("field_width", Handler::Fn(set_field_width));
        table.register("your_bot", Handler::Fn(set_your_bot));
        table.register("player_names", Handler::Fn(set_player_names));
        table.register("piece", Handler::Fn(set_piece));
        Self { table }
    }
}

impl Default for SettingsDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> CommandHandler<Session<W>> for SettingsDecoder {
    fn handle(&mut self, session: &mut Session<W>, args: &mut Args<'_>) {
        let Some(param) = args.next_token() else {
            warn!("settings line with no parameter");
            return;
        };
        if !self.table.dispatch(param, &mut session.game.settings, args) {
            warn!(setting = param, rest = args.rest(), "unknown setting");
        }
    }
}

fn set_time_bank(settings: &mut Settings, args: &mut Args<'_>) {
    match args.next_i32() {
        Some(ms) => settings.time_bank = ms,
        None => warn!("time_bank setting with no value"),
    }
}

fn set_time_per_move(settings: &mut Settings, args: &mut Args<'_>) {
    match args.next_i32() {
        Some(ms) => settings.time_per_move = ms,
        None => warn!("time_per_move setting with no value"),
    }
}

fn set_field_height(settings: &mut Settings, args: &mut Args<'_>) {
    match args.next_i32() {
        Some(height) => settings.field_height = height,
        None => warn!("field_height setting with no value"),
    }
}

fn set_field_width(settings: &mut Settings, args: &mut Args<'_>) {
    match args.next_i32() {
        Some(width) => settings.field_width = width,
        None => warn!("field_width setting with no value"),
    }
}

fn set_your_bot(settings: &mut Settings, args: &mut Args<'_>) {
    match args.next_token() {
        Some(name) => settings.my_name = name.to_string(),
        None => warn!("your_bot setting with no name"),
    }
}

fn set_player_names(settings: &mut Settings, args: &mut Args<'_>) {
    settings.player_names.clear();
    let Some(names) = args.next_token() else {
        return;
    };
    for name in names.split_terminator(',') {
        settings.player_names.push(name.to_string());
    }
}

/// Parse `piece <id> <size> <rot>;<rot>;...` where each rotation holds
/// `size * size` comma-separated cells, row-major.
fn set_piece(settings: &mut Settings, args: &mut Args<'_>) {
    let Some(id) = args.next_char() else {
        warn!("piece setting with no id");
        return;
    };
    let Some(size) = args.next_i32() else {
        warn!(piece = %id, "piece setting with no size");
        return;
    };
    if size <= 0 {
        warn!(piece = %id, size, "piece setting with an unusable size");
        return;
    }
    let Some(data) = args.next_token() else {
        warn!(piece = %id, "piece setting with no rotation data");
        return;
    };

    let mut piece = Piece::new(id, size);
    let edge = size as usize;
    for face in data.split_terminator(';') {
        let mut rows: Vec<Vec<bool>> = Vec::new();
        let mut row: Vec<bool> = Vec::new();
        for cell in face.split_terminator(',') {
            row.push(cell.parse::<i32>().unwrap_or(0) != 0);
            if row.len() == edge {
                rows.push(std::mem::take(&mut row));
            }
        }
        if rows.len() != edge {
            warn!(piece = %id, size, face, "not enough data for shape");
        } else {
            piece.shapes.push(Shape::new(rows));
        }
    }

    if !piece.shapes.is_empty() {
        settings.pieces.insert(id, piece);
    }
}
