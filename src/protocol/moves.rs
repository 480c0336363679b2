//! Moves module - encoder for the outgoing move line
//!
//! One comma-joined line of move tokens answers each action request. The
//! writer buffers tokens for the current turn and `flush` sends them as a
//! single newline-terminated line, flushing the underlying stream so the
//! game engine sees the answer immediately.

use std::io::{self, Write};

use crate::types::Move;

/// Accumulates move tokens and writes them as one protocol line.
#[derive(Debug)]
pub struct MoveWriter<W: Write> {
    out: W,
    line: String,
}

impl<W: Write> MoveWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            line: String::new(),
        }
    }

    fn append(&mut self, token: &str, count: u32) {
        for _ in 0..count {
            if !self.line.is_empty() {
                self.line.push(',');
            }
            self.line.push_str(token);
        }
    }

    /// Append `count` repetitions of a move token
    pub fn emit(&mut self, mv: Move, count: u32) {
        self.append(mv.as_str(), count);
    }

    /// Append the drop token that ends the piece's descent
    pub fn drop_piece(&mut self) {
        self.append("drop", 1);
    }

    /// Write the buffered tokens as one line and reset for the next turn.
    ///
    /// An empty buffer still writes the newline; the engine reads a bare
    /// line as "no moves".
    pub fn flush(&mut self) -> io::Result<()> {
        self.line.push('\n');
        let result = self
            .out
            .write_all(self.line.as_bytes())
            .and_then(|_| self.out.flush());
        self.line.clear();
        result
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
