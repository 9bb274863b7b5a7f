//! Fuzzy text matching used to filter glyph labels and hex codes.
//!
//! Matching is **ASCII-only** case-insensitive: inputs are treated as raw UTF-8
//! bytes and only `A-Z`/`a-z` are folded. Icon labels and hex codes are ASCII, so
//! this keeps the hot loop byte-based.
//!
//! A match is scored in two tiers:
//!
//! - **Prefix:** the candidate starts with the query. Always ranks above any fuzzy
//!   match and always meets every [`SearchPrecision`].
//! - **Fuzzy:** the query is a subsequence of the candidate. The score rewards word
//!   starts (separators, camelCase humps, letter/digit boundaries), consecutive runs
//!   and exact-case hits, and penalizes gaps.
//!
//! Launchers usually gate results on a "precision score" cutoff rather than on raw
//! scores. [`MatchScore::percent`] normalizes a score into `0..=100` so it can be
//! compared against a [`SearchPrecision`] threshold.

#![forbid(unsafe_code)]

mod precision;
mod scoring;

pub use precision::{ParsePrecisionError, SearchPrecision};
pub use scoring::{fuzzy_match, FuzzyMatcher, MatchKind, MatchScore, RankKey};

/// Ranks `candidate` against every whitespace-separated term of `query`.
///
/// Each term is scored on its own and must meet `precision`, so `chevron down`
/// matches `ChevronDown`. The combined key is only as strong as the weakest term
/// kind, and term scores add up. An empty query ranks as a prefix match.
pub fn precision_rank(
    query: &str,
    candidate: &str,
    precision: SearchPrecision,
) -> Option<RankKey> {
    query.split_whitespace().try_fold(RankKey::EMPTY, |acc, term| {
        let score = fuzzy_match(term, candidate)?;
        precision
            .is_met(score.percent(term.len()))
            .then(|| acc.merge(score.rank_key()))
    })
}

/// Returns `true` when every term of `query` matches `candidate` with a
/// normalized score that meets `precision`.
pub fn precision_match(query: &str, candidate: &str, precision: SearchPrecision) -> bool {
    precision_rank(query, candidate, precision).is_some()
}
