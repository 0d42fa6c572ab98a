use std::time::Instant;

use log::trace;

use super::scorer::{Match, Pattern};
use crate::lines::LineStore;

/// A matching line together with its score and highlighted offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedLine {
    /// Position of the line in the original input.
    pub line: usize,
    pub score: i32,
    pub positions: Vec<usize>,
}

impl RankedLine {
    fn new(line: usize, matched: Match) -> Self {
        Self {
            line,
            score: matched.score,
            positions: matched.positions,
        }
    }
}

/// Lines matching the current query, best first.
///
/// Ordered by descending score, then ascending input position, so two entries
/// never compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchIndex {
    entries: Vec<RankedLine>,
}

impl MatchIndex {
    /// Score every line in `lines` against `query` from scratch.
    pub fn rebuild(query: &str, lines: &LineStore) -> Self {
        let started = Instant::now();
        let pattern = Pattern::new(query);

        let mut entries: Vec<RankedLine> = lines
            .iter()
            .enumerate()
            .filter_map(|(index, text)| {
                pattern
                    .score(text)
                    .map(|matched| RankedLine::new(index, matched))
            })
            .collect();
        entries.sort_unstable_by(|a, b| b.score.cmp(&a.score).then(a.line.cmp(&b.line)));

        trace!(
            "rebuilt index for {}-char query: {}/{} lines in {:?}",
            pattern.len(),
            entries.len(),
            lines.len(),
            started.elapsed()
        );

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, rank: usize) -> Option<&RankedLine> {
        self.entries.get(rank)
    }

    pub fn entries(&self) -> &[RankedLine] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedLine> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a MatchIndex {
    type Item = &'a RankedLine;
    type IntoIter = std::slice::Iter<'a, RankedLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Clamp a selection cursor into `[0, len - 1]`, or 0 for an empty index.
pub fn clamp_cursor(cursor: usize, len: usize) -> usize {
    cursor.min(len.saturating_sub(1))
}
