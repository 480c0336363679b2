//! Bot module - session state and the line-driven run loop
//!
//! The bot reads one command line at a time, routes it through a
//! command table, and answers `action` requests by writing a move line.
//! Handlers share a [`Session`]: the game model, the optional strategy,
//! and the move writer.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{info, warn};

use crate::core::game::GameState;
use crate::core::snapshot::GameSnapshot;
use crate::protocol::action::handle_action;
use crate::protocol::dispatch::{Args, CommandTable, Handler};
use crate::protocol::moves::MoveWriter;
use crate::protocol::settings::SettingsDecoder;
use crate::protocol::update::UpdateDecoder;
use crate::strategy::Strategy;
use crate::types::STREAM_END;

/// Piece geometry fed to the bot before the engine stream starts.
///
/// The engine announces which piece is falling but never its cell
/// grids, so the bot primes itself with this stream first. The sentinel
/// line ends the bootstrap without leaving the starting phase.
pub const STANDARD_PIECES: &str = "\
settings piece I 4 0,0,0,0,1,1,1,1,0,0,0,0,0,0,0,0;0,0,1,0,0,0,1,0,0,0,1,0,0,0,1,0
settings piece J 3 1,0,0,1,1,1,0,0,0;0,1,1,0,1,0,0,1,0;0,0,0,1,1,1,0,0,1;0,1,0,0,1,0,1,1,0
settings piece L 3 0,0,1,1,1,1,0,0,0;0,1,0,0,1,0,0,1,1;0,0,0,1,1,1,1,0,0;1,1,0,0,1,0,0,1,0
settings piece O 2 1,1,1,1
settings piece S 3 0,1,1,1,1,0,0,0,0;0,1,0,0,1,1,0,0,1
settings piece T 3 0,1,0,1,1,1,0,0,0;0,1,0,0,1,1,0,1,0;0,0,0,1,1,1,0,1,0;0,1,0,1,1,0,0,1,0
settings piece Z 3 1,1,0,0,1,1,0,0,0;0,0,1,0,1,1,0,1,0
[[STREAMEND]]
";

/// Everything a handler may touch while a line is being decoded.
pub struct Session<W: Write> {
    pub game: GameState,
    pub strategy: Option<Box<dyn Strategy<W>>>,
    pub writer: MoveWriter<W>,
    pub quit: bool,
}

impl<W: Write> Session<W> {
    pub fn new(out: W) -> Self {
        Self {
            game: GameState::new(),
            strategy: None,
            writer: MoveWriter::new(out),
            quit: false,
        }
    }
}

/// Line-driven bot: decodes engine commands into the game model and
/// answers action requests through the installed strategy.
pub struct Bot<W: Write> {
    session: Session<W>,
    table: CommandTable<Session<W>>,
}

impl<W: Write> Bot<W> {
    pub fn new(out: W) -> Self {
        let mut table = CommandTable::new();
        table.register("settings", Handler::Scoped(Box::new(SettingsDecoder::new())));
        table.register("update", Handler::Scoped(Box::new(UpdateDecoder::new())));
        table.register("action", Handler::Fn(handle_action::<W>));
        Self {
            session: Session::new(out),
            table,
        }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn Strategy<W>>) {
        self.session.strategy = Some(strategy);
    }

    pub fn game(&self) -> &GameState {
        &self.session.game
    }

    pub fn into_output(self) -> W {
        self.session.writer.into_inner()
    }

    /// Prime the model with the standard seven pieces.
    pub fn load_standard_pieces(&mut self) -> Result<()> {
        self.run(STANDARD_PIECES.as_bytes())
    }

    /// Consume command lines until the input ends or a handler quits.
    ///
    /// The stream-end sentinel is honored only during the starting
    /// phase; the first action request ends that phase, and from then
    /// on the sentinel is just an unknown command.
    pub fn run(&mut self, input: impl BufRead) -> Result<()> {
        let mut starting = true;
        for line in input.lines() {
            let line = line?;
            let mut args = Args::new(&line);
            let Some(command) = args.next_token() else {
                continue;
            };
            if starting {
                if command == "action" {
                    starting = false;
                }
                if command == STREAM_END {
                    break;
                }
            }
            if !self.table.dispatch(command, &mut self.session, &mut args) {
                warn!(command, rest = args.rest(), "unknown command");
            }
            if self.session.quit {
                break;
            }
        }
        Ok(())
    }

    /// Extra line commands for replay files and driving the bot by hand.
    ///
    /// `Output` and `Round` swallow the engine's own log lines so a
    /// captured match transcript can be replayed as-is.
    pub fn register_debug_commands(&mut self) {
        self.table.register("hello", Handler::Fn(debug_hello::<W>));
        self.table.register("dump", Handler::Fn(debug_dump::<W>));
        self.table.register("#", Handler::Fn(debug_ignore::<W>));
        self.table.register("Output", Handler::Fn(debug_ignore::<W>));
        self.table.register("Round", Handler::Fn(debug_ignore::<W>));
        self.table.register("quit", Handler::Fn(debug_quit::<W>));
    }
}

fn debug_hello<W: Write>(_session: &mut Session<W>, _args: &mut Args<'_>) {
    info!("hi!");
}

fn debug_dump<W: Write>(session: &mut Session<W>, _args: &mut Args<'_>) {
    let snapshot = GameSnapshot::capture(&session.game);
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => eprintln!("{json}"),
        Err(err) => warn!(err = %err, "failed to serialize game snapshot"),
    }
}

fn debug_ignore<W: Write>(_session: &mut Session<W>, _args: &mut Args<'_>) {}

fn debug_quit<W: Write>(session: &mut Session<W>, _args: &mut Args<'_>) {
    session.quit = true;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_rotation_counts() {
        let mut bot = Bot::new(Vec::new());
        bot.load_standard_pieces().unwrap();

        let pieces = &bot.game().settings.pieces;
        for (id, rotations) in [
            ('I', 2),
            ('J', 4),
            ('L', 4),
            ('O', 1),
            ('S', 2),
            ('T', 4),
            ('Z', 2),
        ] {
            assert_eq!(
                pieces.get(&id).map(|p| p.shapes.len()),
                Some(rotations),
                "piece {id}"
            );
        }
    }

    #[test]
    fn test_sentinel_only_ends_bootstrap() {
        let mut bot = Bot::new(Vec::new());
        let input = "action moves 100\n[[STREAMEND]]\nupdate game round 7\n";
        bot.run(input.as_bytes()).unwrap();

        assert_eq!(bot.game().round.id, 7);
    }

    #[test]
    fn test_sentinel_breaks_before_first_action() {
        let mut bot = Bot::new(Vec::new());
        let input = "[[STREAMEND]]\nupdate game round 7\n";
        bot.run(input.as_bytes()).unwrap();

        assert_eq!(bot.game().round.id, 0);
    }

    #[test]
    fn test_quit_stops_the_loop() {
        let mut bot = Bot::new(Vec::new());
        bot.register_debug_commands();
        let input = "settings field_width 10\nquit\nsettings field_width 12\n";
        bot.run(input.as_bytes()).unwrap();

        assert_eq!(bot.game().settings.field_width, 10);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let mut bot = Bot::new(Vec::new());
        let input = "\n   \nsettings field_height 20\n";
        bot.run(input.as_bytes()).unwrap();

        assert_eq!(bot.game().settings.field_height, 20);
    }

    #[test]
    fn test_unknown_command_is_harmless() {
        let mut bot = Bot::new(Vec::new());
        let input = "engine says hi\nsettings field_width 10\n";
        bot.run(input.as_bytes()).unwrap();

        assert_eq!(bot.game().settings.field_width, 10);
    }
}
