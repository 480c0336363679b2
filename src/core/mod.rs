//! Core module - the game model built up from protocol updates
//!
//! Pure state with no I/O: settings and piece geometry, the round header,
//! and one field per player. The decoders in `crate::protocol` write it;
//! strategies read it.

pub mod field;
pub mod game;
pub mod shape;
pub mod snapshot;

// Re-export commonly used types
pub use field::Field;
pub use game::{GameState, PlayerState, Round, Settings};
pub use shape::{Coord, Piece, Shape};
pub use snapshot::GameSnapshot;
