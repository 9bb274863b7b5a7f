use thiserror::Error;

use crate::catalog::{Icon, IconCatalog};
use crate::matcher::{matches_query, FuzzyTextMatcher, TextMatcher};
use crate::result::{ResultAction, ResultOptions, SearchResult};

/// Title of the single result returned for an empty query.
pub const PLACEHOLDER_TITLE: &str = "Waiting for input...";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);

/// The host's clipboard.
pub trait Clipboard {
    fn copy_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// The plugin: an icon catalog plus the matcher used to filter it.
///
/// Built once at startup and then queried read-only.
#[derive(Debug, Clone)]
pub struct GlyphSearch<M> {
    catalog: IconCatalog,
    matcher: M,
    options: ResultOptions,
}

impl<M: TextMatcher> GlyphSearch<M> {
    pub fn new(catalog: IconCatalog, matcher: M) -> Self {
        Self::with_options(catalog, matcher, ResultOptions::default())
    }

    pub fn with_options(catalog: IconCatalog, matcher: M, options: ResultOptions) -> Self {
        Self {
            catalog,
            matcher,
            options,
        }
    }

    pub fn catalog(&self) -> &IconCatalog {
        &self.catalog
    }

    pub fn matcher(&self) -> &M {
        &self.matcher
    }

    pub fn options(&self) -> &ResultOptions {
        &self.options
    }

    /// Every icon matching `text`, in catalog order, as primary results.
    ///
    /// Blank input yields a single [`PLACEHOLDER_TITLE`] result.
    pub fn query(&self, text: &str) -> Vec<SearchResult> {
        let text = text.trim();
        if text.is_empty() {
            return vec![SearchResult::placeholder(PLACEHOLDER_TITLE, &self.options)];
        }

        let results: Vec<_> = self
            .catalog
            .iter()
            .enumerate()
            .filter(|(_, icon)| matches_query(icon, text, &self.matcher))
            .map(|(index, icon)| SearchResult::primary(index, icon, &self.options))
            .collect();

        tracing::debug!(
            target: "glyph.search",
            query = text,
            matches = results.len(),
            catalog = self.catalog.len(),
            "query"
        );
        results
    }

    /// The alternate-format results for a previously returned result.
    ///
    /// Results without a back-reference, or whose reference no longer resolves
    /// against this catalog, get an empty menu.
    pub fn context_menu(&self, selected: &SearchResult) -> Vec<SearchResult> {
        let Some(reference) = selected.icon else {
            return Vec::new();
        };
        match reference.resolve(&self.catalog) {
            Some(icon) => SearchResult::alternates(reference.index(), icon, &self.options).to_vec(),
            None => {
                tracing::debug!(
                    target: "glyph.search",
                    index = reference.index(),
                    codepoint = %reference.codepoint(),
                    "ignoring stale icon reference"
                );
                Vec::new()
            }
        }
    }

    /// Runs `result`'s action and reports whether it succeeded.
    pub fn activate(&self, result: &SearchResult, clipboard: &dyn Clipboard) -> bool {
        match (result.action, result.copy_text.as_deref()) {
            (ResultAction::CopyToClipboard, Some(text)) => match clipboard.copy_text(text) {
                Ok(()) => true,
                Err(err) => {
                    tracing::warn!(
                        target: "glyph.search",
                        title = %result.title,
                        error = %err,
                        "failed to copy result"
                    );
                    false
                }
            },
            _ => false,
        }
    }
}

impl GlyphSearch<FuzzyTextMatcher> {
    /// The highest-ranked match for `text` as a primary result.
    ///
    /// Exact and prefix label hits beat fuzzy ones; ties go to the icon that comes
    /// first in the catalog. Blank input has no best match.
    pub fn best_match(&self, text: &str) -> Option<SearchResult> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let mut best: Option<(glyph_fuzzy::RankKey, usize, &Icon)> = None;
        for (index, icon) in self.catalog.iter().enumerate() {
            let Some(key) = self.matcher.rank(icon, text) else {
                continue;
            };
            if best.as_ref().map_or(true, |(top, _, _)| key > *top) {
                best = Some((key, index, icon));
            }
        }

        best.map(|(_, index, icon)| SearchResult::primary(index, icon, &self.options))
    }
}
