//! Greedy, left-to-right subsequence scoring.
//!
//! Every query character is matched against the *first* occurrence after the
//! previous match. The scorer never backtracks, so an early pick can block a
//! better alignment later in the line (`"ab"` against `"a_xab"` takes the
//! leading `a` and pays for the gap instead of matching the contiguous `ab`).
//! Rankings depend on this behaviour; switching to an optimal alignment would
//! reorder results.

/// Credit for every matched character.
pub const SCORE_MATCH: i32 = 10;
/// Bonus when a match directly follows the previous one.
pub const SCORE_CONSECUTIVE: i32 = 15;
/// Bonus when a match starts a word or path segment.
pub const SCORE_BOUNDARY: i32 = 8;
/// Penalty per character skipped between two matches.
pub const SCORE_GAP: i32 = -1;

/// Score and matched character offsets for one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub score: i32,
    /// Character offsets into the line, strictly increasing, one per query
    /// character.
    pub positions: Vec<usize>,
}

impl Match {
    /// Result for the empty query: neutral score, nothing highlighted.
    pub fn unfiltered() -> Self {
        Self {
            score: 0,
            positions: Vec::new(),
        }
    }
}

/// A query prepared for repeated scoring against many lines.
#[derive(Debug, Clone, Default)]
pub struct Pattern {
    needles: Vec<char>,
}

impl Pattern {
    pub fn new(query: &str) -> Self {
        Self {
            needles: query.chars().map(fold_case).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needles.is_empty()
    }

    /// Number of characters in the query.
    pub fn len(&self) -> usize {
        self.needles.len()
    }

    /// Score `line`, returning `None` when the query is not a case-insensitive
    /// subsequence of it.
    ///
    /// Runs in a single pass over the line's characters.
    pub fn score(&self, line: &str) -> Option<Match> {
        let Some(&first) = self.needles.first() else {
            return Some(Match::unfiltered());
        };

        let mut wanted = first;
        let mut score = 0;
        let mut positions = Vec::with_capacity(self.needles.len());
        // Offset a match must land on to count as contiguous.
        let mut expected = 0;
        let mut previous = None;

        for (offset, ch) in line.chars().enumerate() {
            if fold_case(ch) == wanted {
                score += SCORE_MATCH;
                if offset == expected {
                    score += SCORE_CONSECUTIVE;
                } else {
                    score += SCORE_GAP * gap_len(offset - expected);
                }
                if is_boundary(previous, ch) {
                    score += SCORE_BOUNDARY;
                }

                positions.push(offset);
                expected = offset + 1;

                match self.needles.get(positions.len()) {
                    Some(&next) => wanted = next,
                    None => return Some(Match { score, positions }),
                }
            }
            previous = Some(ch);
        }

        None
    }
}

/// Score a single `(query, line)` pair.
///
/// Use [`Pattern`] directly when scoring the same query against many lines.
pub fn score(query: &str, line: &str) -> Option<Match> {
    Pattern::new(query).score(line)
}

/// Whether a match on `current` begins a word: it follows a separator, starts
/// the line, or is an uppercase letter after a lowercase one.
pub fn is_boundary(previous: Option<char>, current: char) -> bool {
    match previous {
        None => true,
        Some('/' | '_' | '-' | ' ') => true,
        Some(prev) => prev.is_lowercase() && current.is_uppercase(),
    }
}

fn fold_case(ch: char) -> char {
    if ch.is_ascii() {
        return ch.to_ascii_lowercase();
    }
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

fn gap_len(skipped: usize) -> i32 {
    i32::try_from(skipped).unwrap_or(i32::MAX)
}
