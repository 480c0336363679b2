//! Shared protocol vocabulary
//! Pure data types with no dependencies on the rest of the crate

/// Sentinel token that ends a bootstrap input stream.
///
/// The run loop honors it only before the first action request, so a live
/// server stream can never be cut short by a stray sentinel.
pub const STREAM_END: &str = "[[STREAMEND]]";

/// Repeatable moves accepted by the game engine.
///
/// The `drop` token is not listed here: it ends the turn and is written
/// once per line by `MoveWriter::drop_piece`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    TurnLeft,
    TurnRight,
    Left,
    Right,
    Down,
}

impl Move {
    /// Wire token for this move
    pub fn as_str(&self) -> &'static str {
        match self {
            Move::TurnLeft => "turnleft",
            Move::TurnRight => "turnright",
            Move::Left => "left",
            Move::Right => "right",
            Move::Down => "down",
        }
    }
}
