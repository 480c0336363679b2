//! Dispatch module - token-to-handler command routing
//!
//! Every protocol line starts with a command token; the registered handler
//! for that token consumes the rest of the line. Scoped decoders own a
//! nested table and route the next token recursively, so the vocabulary
//! forms a tree: `settings`, `update` and `action` at the top, their
//! parameters one level down.

use std::collections::HashMap;

/// Cursor over the whitespace-separated fields of one input line.
///
/// Tokens borrow from the line, so an `Args` never outlives the read-loop
/// iteration that produced it. Leftover fields are dropped with it; a
/// handler that consumes too little cannot corrupt the next line.
#[derive(Debug)]
pub struct Args<'a> {
    rest: &'a str,
}

impl<'a> Args<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    /// Next field, if any
    pub fn next_token(&mut self) -> Option<&'a str> {
        let trimmed = self.rest.trim_start();
        if trimmed.is_empty() {
            self.rest = "";
            return None;
        }
        match trimmed.split_once(char::is_whitespace) {
            Some((token, rest)) => {
                self.rest = rest;
                Some(token)
            }
            None => {
                self.rest = "";
                Some(trimmed)
            }
        }
    }

    /// Next field parsed as an integer
    pub fn next_i32(&mut self) -> Option<i32> {
        self.next_token().and_then(|t| t.parse().ok())
    }

    /// First character of the next field
    pub fn next_char(&mut self) -> Option<char> {
        self.next_token().and_then(|t| t.chars().next())
    }

    /// Unconsumed remainder of the line, for diagnostics
    pub fn rest(&self) -> &'a str {
        self.rest
    }
}

/// Handler backed by a plain function. Used for leaf commands that only
/// mutate the context.
pub type HandlerFn<C> = fn(&mut C, &mut Args<'_>);

/// Stateful handler. Scoped decoders implement this to keep their own
/// nested table between lines.
pub trait CommandHandler<C> {
    fn handle(&mut self, ctx: &mut C, args: &mut Args<'_>);
}

/// A registered command handler.
///
/// The context is passed in at dispatch time rather than captured at
/// registration, so handlers never hold aliases into the game state.
pub enum Handler<C> {
    Fn(HandlerFn<C>),
    Scoped(Box<dyn CommandHandler<C>>),
}

/// Maps command tokens to handlers over a shared context `C`.
pub struct CommandTable<C> {
    handlers: HashMap<String, Handler<C>>,
}

impl<C> CommandTable<C> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Install the handler for `token`, replacing any previous one.
    pub fn register(&mut self, token: &str, handler: Handler<C>) {
        self.handlers.insert(token.to_string(), handler);
    }

    /// Drop the registration for `token`. Returns whether one existed.
    pub fn remove(&mut self, token: &str) -> bool {
        self.handlers.remove(token).is_some()
    }

    /// Route one command to its handler.
    ///
    /// Returns false without touching the context when the token has no
    /// registration; the caller decides whether that is worth logging.
    pub fn dispatch(&mut self, token: &str, ctx: &mut C, args: &mut Args<'_>) -> bool {
        match self.handlers.get_mut(token) {
            Some(Handler::Fn(f)) => {
                f(ctx, args);
                true
            }
            Some(Handler::Scoped(h)) => {
                h.handle(ctx, args);
                true
            }
            None => false,
        }
    }
}

impl<C> Default for CommandTable<C> {
    fn default() -> Self {
        Self::new()
    }
}
