//! Fuzzy matching: the per-line scorer and the ranked index built from it.

mod index;
mod scorer;

pub use index::{MatchIndex, RankedLine, clamp_cursor};
pub use scorer::{
    Match, Pattern, SCORE_BOUNDARY, SCORE_CONSECUTIVE, SCORE_GAP, SCORE_MATCH, is_boundary, score,
};
