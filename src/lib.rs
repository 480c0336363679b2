//! Bot for the Block Battle line protocol.
//!
//! The game engine talks to its bots over pipes: command lines arrive
//! on stdin, the bot answers `action` requests with one comma-joined
//! move line on stdout, and stderr is free for diagnostics.
//!
//! # Command Lines
//!
//! - **settings**: match parameters sent before the first round
//!   (`time_bank`, `field_width`, `your_bot`, `player_names`, `piece`, ...)
//! - **update**: state for the round header (`update game ...`) or for
//!   one player (`update player1 field ...`)
//! - **action**: a request for moves, carrying the remaining think time
//!
//! # Example Session
//!
//! ```text
//! Engine -> Bot: settings player_names player1,player2
//! Engine -> Bot: settings your_bot player1
//! Engine -> Bot: settings field_width 10
//! Engine -> Bot: update game round 1
//! Engine -> Bot: update game this_piece_type O
//! Engine -> Bot: update game this_piece_position 4,-1
//! Engine -> Bot: update player1 field 0,0,0,0,0,0,0,0,0,0;0,0,0,0,0,0,0,0,0,0
//! Engine -> Bot: action moves 10000
//! Bot -> Engine: right,right,turnright,drop
//! ```
//!
//! # Bootstrap
//!
//! The engine announces which piece is falling but never its cell
//! grids, so [`bot::Bot`] primes its model from
//! [`bot::STANDARD_PIECES`] before reading the live stream. The
//! `[[STREAMEND]]` sentinel ends such bootstrap streams; it has no
//! meaning once the first action request has arrived.

pub mod bot;
pub mod config;
pub mod core;
pub mod protocol;
pub mod strategy;
pub mod types;

pub use bot::{Bot, Session};
pub use core::game::GameState;
