//! `neo` reads candidate lines from a pipe, lets the user narrow them down
//! with a fuzzy query in a full-screen terminal picker, and hands back the
//! chosen line.
//!
//! The crate root re-exports the pieces an embedder needs: the [`LineStore`]
//! of candidates, the scorer and ranked [`MatchIndex`], and the interactive
//! [`Session`] with its terminal runtime.

pub mod app_dirs;
pub mod error;
pub mod lines;
pub mod logging;
pub mod matching;
pub mod ui;

pub use error::StartupError;
pub use lines::{InputLimits, LineStore};
pub use matching::{Match, MatchIndex, Pattern, RankedLine, score};
pub use ui::{Outcome, Session, SessionOptions, SessionState, Theme, run};
