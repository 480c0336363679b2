//! Strategy module - move selection for action requests
//!
//! A strategy turns the current game model into one move line. The
//! stock implementation picks a random rotation and column; smarter
//! placement logic plugs in behind the same trait.

use std::io::{self, Write};

use crate::core::game::GameState;
use crate::protocol::moves::MoveWriter;
use crate::types::Move;

/// Picks moves for one action request and writes them as a move line.
pub trait Strategy<W: Write> {
    fn make_moves(
        &mut self,
        game: &GameState,
        time_left: i32,
        moves: &mut MoveWriter<W>,
    ) -> io::Result<()>;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Rotates the current piece a random number of times, shifts it to a
/// random column, and drops it.
pub struct RandomStrategy {
    rng: SimpleRng,
}

impl RandomStrategy {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl<W: Write> Strategy<W> for RandomStrategy {
    fn make_moves(
        &mut self,
        game: &GameState,
        _time_left: i32,
        moves: &mut MoveWriter<W>,
    ) -> io::Result<()> {
        if let Some(piece) = game.current_piece() {
            if !piece.shapes.is_empty() {
                let turns = self.rng.next_range(piece.shapes.len() as u32);
                if turns > 0 {
                    moves.emit(Move::TurnRight, turns);
                }
            }
        }
        let width = game.settings.field_width;
        if width > 0 {
            let target = self.rng.next_range(width as u32) as i32;
            let x = game.round.piece_x;
            if target < x {
                moves.emit(Move::Left, (x - target) as u32);
            } else if target > x {
                moves.emit(Move::Right, (target - x) as u32);
            }
        }
        moves.drop_piece();
        moves.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::shape::{Piece, Shape};

    fn game_with_piece() -> GameState {
        let mut game = GameState::new();
        game.settings.field_width = 10;
        game.settings.field_height = 20;

        let mut piece = Piece::new('S', 3);
        piece.shapes.push(Shape::new(vec![
            vec![false, true, true],
            vec![true, true, false],
            vec![false, false, false],
        ]));
        piece.shapes.push(Shape::new(vec![
            vec![false, true, false],
            vec![false, true, true],
            vec![false, false, true],
        ]));
        game.settings.pieces.insert('S', piece);

        game.round.this_piece = Some('S');
        game.round.piece_x = 4;
        game
    }

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_does_not_stick() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_move_line_ends_with_drop() {
        let game = game_with_piece();
        let mut strategy = RandomStrategy::new(7);
        let mut moves = MoveWriter::new(Vec::new());

        strategy.make_moves(&game, 10000, &mut moves).unwrap();

        let line = String::from_utf8(moves.into_inner()).unwrap();
        assert!(line.ends_with("drop\n"), "got {line:?}");
        for token in line.trim_end().split(',') {
            assert!(
                matches!(token, "turnright" | "left" | "right" | "drop"),
                "unexpected token {token:?}"
            );
        }
    }

    #[test]
    fn test_same_seed_same_line() {
        let game = game_with_piece();
        let mut first = MoveWriter::new(Vec::new());
        let mut second = MoveWriter::new(Vec::new());

        RandomStrategy::new(99)
            .make_moves(&game, 10000, &mut first)
            .unwrap();
        RandomStrategy::new(99)
            .make_moves(&game, 10000, &mut second)
            .unwrap();

        assert_eq!(first.into_inner(), second.into_inner());
    }

    #[test]
    fn test_degenerate_game_still_drops() {
        let game = GameState::new();
        let mut strategy = RandomStrategy::new(1);
        let mut moves = MoveWriter::new(Vec::new());

        strategy.make_moves(&game, 10000, &mut moves).unwrap();

        assert_eq!(String::from_utf8(moves.into_inner()).unwrap(), "drop\n");
    }
}
