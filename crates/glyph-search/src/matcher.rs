use glyph_fuzzy::{RankKey, SearchPrecision};

use crate::catalog::Icon;

/// The host's text matching capability.
///
/// The core only decides *which* strings are compared; how a candidate is scored
/// belongs to the implementation. Any `Fn(&str, &str) -> bool` closure taking
/// `(candidate, pattern)` is a `TextMatcher`.
pub trait TextMatcher {
    /// Returns `true` when `candidate` is an acceptable match for `pattern`.
    fn is_match(&self, candidate: &str, pattern: &str) -> bool;
}

impl<F> TextMatcher for F
where
    F: Fn(&str, &str) -> bool,
{
    fn is_match(&self, candidate: &str, pattern: &str) -> bool {
        self(candidate, pattern)
    }
}

/// [`TextMatcher`] backed by `glyph-fuzzy`, gated on a precision threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FuzzyTextMatcher {
    precision: SearchPrecision,
}

impl FuzzyTextMatcher {
    pub fn new(precision: SearchPrecision) -> Self {
        Self { precision }
    }

    pub fn precision(&self) -> SearchPrecision {
        self.precision
    }

    /// How well `icon` matches `query`: the stronger of its label and hex ranks.
    pub fn rank(&self, icon: &Icon, query: &str) -> Option<RankKey> {
        let label = glyph_fuzzy::precision_rank(query, icon.label(), self.precision);
        let hex = glyph_fuzzy::precision_rank(query, &icon.codepoint().hex(), self.precision);
        label.max(hex)
    }
}

impl TextMatcher for FuzzyTextMatcher {
    fn is_match(&self, candidate: &str, pattern: &str) -> bool {
        glyph_fuzzy::precision_match(pattern, candidate, self.precision)
    }
}

/// An icon matches when its label or its 4-digit uppercase hex code does.
pub fn matches_query<M>(icon: &Icon, query: &str, matcher: &M) -> bool
where
    M: TextMatcher + ?Sized,
{
    matcher.is_match(icon.label(), query) || matcher.is_match(&icon.codepoint().hex(), query)
}
