//! The interactive picker: session state, key handling, frame composition and
//! the terminal event loop.

mod actions;
mod render;
mod runtime;
mod state;
mod terminal;
mod theme;

pub use actions::{Action, Step, action_for};
pub use render::{Screen, View, compose, result_rows, visible_range};
pub use runtime::{EventSource, Input, TerminalEvents, drive, run};
pub use state::{
    DEFAULT_MAX_QUERY_LENGTH, DEFAULT_PROMPT, Outcome, Session, SessionOptions, SessionState,
};
pub use terminal::TerminalGuard;
pub use theme::{MOCHA, PLAIN, Theme};
