//! Session state owned by the event loop.
//!
//! A [`Session`] bundles the query, the ranked matches derived from it, the
//! selection cursor and the cached terminal size. Only event handling mutates
//! it (see the `actions` module); rendering reads it through [`Session::view`].

use log::debug;
use ratatui::layout::Size;

use super::render::View;
use crate::lines::LineStore;
use crate::matching::{MatchIndex, RankedLine, clamp_cursor};

/// Default prompt marker drawn before the query.
pub const DEFAULT_PROMPT: &str = "> ";
/// Maximum number of characters accepted into the query.
pub const DEFAULT_MAX_QUERY_LENGTH: usize = 4_095;

/// Knobs applied when a session is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    pub prompt: String,
    pub initial_query: String,
    pub max_query_length: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            initial_query: String::new(),
            max_query_length: DEFAULT_MAX_QUERY_LENGTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Editing,
    /// Carries the input position of the chosen line.
    Confirmed(usize),
    Cancelled,
}

/// How a finished session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<'s> {
    Confirmed(&'s str),
    Cancelled,
}

#[derive(Debug)]
pub struct Session<'s> {
    lines: &'s LineStore,
    prompt: String,
    pub(super) query: String,
    pub(super) max_query_length: usize,
    pub(super) matches: MatchIndex,
    pub(super) cursor: usize,
    pub(super) size: Size,
    pub(super) state: SessionState,
}

impl<'s> Session<'s> {
    pub fn new(lines: &'s LineStore, options: SessionOptions, size: Size) -> Self {
        let SessionOptions {
            prompt,
            initial_query,
            max_query_length,
        } = options;

        let query: String = initial_query
            .chars()
            .filter(|ch| !ch.is_control())
            .take(max_query_length)
            .collect();

        let mut session = Self {
            lines,
            prompt,
            query,
            max_query_length,
            matches: MatchIndex::default(),
            cursor: 0,
            size,
            state: SessionState::Editing,
        };
        session.refresh_matches();
        debug!(
            "session opened on {}x{} terminal with {} line(s)",
            size.width,
            size.height,
            lines.len()
        );
        session
    }

    pub fn lines(&self) -> &'s LineStore {
        self.lines
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn matches(&self) -> &MatchIndex {
        &self.matches
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The ranked entry under the selection cursor, if any line matches.
    pub fn selected(&self) -> Option<&RankedLine> {
        self.matches.get(self.cursor)
    }

    /// The final result once the session has left the editing state.
    pub fn outcome(&self) -> Option<Outcome<'s>> {
        match self.state {
            SessionState::Editing => None,
            SessionState::Cancelled => Some(Outcome::Cancelled),
            SessionState::Confirmed(line) => self.lines.get(line).map(Outcome::Confirmed),
        }
    }

    /// Snapshot of everything the renderer needs for one frame.
    pub fn view(&self) -> View<'_> {
        View {
            prompt: &self.prompt,
            query: &self.query,
            lines: self.lines,
            matches: &self.matches,
            cursor: self.cursor,
            size: self.size,
        }
    }

    /// Recompute the match index for the current query and move the cursor
    /// back to the top result.
    pub(super) fn refresh_matches(&mut self) {
        self.matches = MatchIndex::rebuild(&self.query, self.lines);
        self.cursor = clamp_cursor(0, self.matches.len());
    }
}
