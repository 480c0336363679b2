//! Round module - decoder for the `update game` vocabulary

use tracing::warn;

use crate::core::game::{GameState, Round};
use crate::protocol::dispatch::{Args, CommandHandler, CommandTable, Handler};

/// Decodes `update game <name> <value>` lines into the round header.
pub struct RoundDecoder {
    table: CommandTable<Round>,
}

impl RoundDecoder {
    pub fn new() -> Self {
        let mut table = CommandTable::new();
        table.register("round", Handler::Fn(set_round_id));
        table.register("this_piece_type", Handler::Fn(set_this_piece));
        table.register("next_piece_type", Handler::Fn(set_next_piece));
        table.register("this_piece_position", Handler::Fn(set_piece_position));
        Self { table }
    }
}

impl Default for RoundDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandHandler<GameState> for RoundDecoder {
    fn handle(&mut self, game: &mut GameState, args: &mut Args<'_>) {
        let Some(param) = args.next_token() else {
            warn!("game update with no parameter");
            return;
        };
        if !self.table.dispatch(param, &mut game.round, args) {
            warn!(setting = param, rest = args.rest(), "unknown game setting");
        }
    }
}

fn set_round_id(round: &mut Round, args: &mut Args<'_>) {
    match args.next_i32() {
        Some(id) => round.id = id,
        None => warn!("round update with no number"),
    }
}

fn set_this_piece(round: &mut Round, args: &mut Args<'_>) {
    match args.next_char() {
        Some(id) => round.this_piece = Some(id),
        None => warn!("this_piece_type with no piece id"),
    }
}

fn set_next_piece(round: &mut Round, args: &mut Args<'_>) {
    match args.next_char() {
        Some(id) => round.next_piece = Some(id),
        None => warn!("next_piece_type with no piece id"),
    }
}

/// Parse `x,y`. Components past the second are ignored; a lone component
/// only updates x.
fn set_piece_position(round: &mut Round, args: &mut Args<'_>) {
    let Some(coords) = args.next_token() else {
        warn!("this_piece_position with no coordinates");
        return;
    };
    for (index, item) in coords.split_terminator(',').enumerate() {
        let value = item.parse().unwrap_or(0);
        match index {
            0 => round.piece_x = value,
            1 => round.piece_y = value,
            _ => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(round: &mut Round, line: &str) {
        let mut decoder = RoundDecoder::new();
        let mut args = Args::new(line);
        let param = args.next_token().unwrap();
        assert!(decoder.table.dispatch(param, round, &mut args));
    }

    #[test]
    fn test_round_fields() {
        let mut round = Round::default();
        decode(&mut round, "round 12");
        decode(&mut round, "this_piece_type S");
        decode(&mut round, "next_piece_type Z");

        assert_eq!(round.id, 12);
        assert_eq!(round.this_piece, Some('S'));
        assert_eq!(round.next_piece, Some('Z'));
    }

    #[test]
    fn test_position_pair() {
        let mut round = Round::default();
        decode(&mut round, "this_piece_position 4,-1");
        assert_eq!(round.piece_x, 4);
        assert_eq!(round.piece_y, -1);
    }

    #[test]
    fn test_position_extra_components_ignored() {
        let mut round = Round::default();
        decode(&mut round, "this_piece_position 3,0,99");
        assert_eq!(round.piece_x, 3);
        assert_eq!(round.piece_y, 0);
    }

    #[test]
    fn test_position_single_component() {
        let mut round = Round::default();
        round.piece_y = 7;
        decode(&mut round, "this_piece_position 5");
        assert_eq!(round.piece_x, 5);
        assert_eq!(round.piece_y, 7);
    }

    #[test]
    fn test_position_bad_component_reads_zero() {
        let mut round = Round::default();
        decode(&mut round, "this_piece_position x,2");
        assert_eq!(round.piece_x, 0);
        assert_eq!(round.piece_y, 2);
    }
}
