//! Protocol module - line decoding and move encoding

pub mod action;
pub mod dispatch;
pub mod moves;
pub mod player;
pub mod round;
pub mod settings;
pub mod update;

pub use dispatch::{Args, CommandHandler, CommandTable, Handler, HandlerFn};
pub use moves::MoveWriter;
pub use settings::SettingsDecoder;
pub use update::UpdateDecoder;
