use std::cell::Cell;

use glyph_search::{
    Clipboard, ClipboardError, Codepoint, FuzzyTextMatcher, GlyphSearch, Icon, IconCatalog,
    ResultAction, PLACEHOLDER_TITLE,
};

struct CountingClipboard {
    calls: Cell<usize>,
}

impl Clipboard for CountingClipboard {
    fn copy_text(&self, _text: &str) -> Result<(), ClipboardError> {
        self.calls.set(self.calls.get() + 1);
        Ok(())
    }
}

struct BrokenClipboard;

impl Clipboard for BrokenClipboard {
    fn copy_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError("locked by another process".to_owned()))
    }
}

#[test]
fn blank_queries_return_only_the_placeholder() {
    let plugin = GlyphSearch::new(super::sample_catalog(), super::substring);
    let clipboard = CountingClipboard {
        calls: Cell::new(0),
    };

    for text in ["", " ", "\t\n  "] {
        let results = plugin.query(text);
        assert_eq!(results.len(), 1, "{text:?}");
        assert_eq!(results[0].title, PLACEHOLDER_TITLE);
        assert_eq!(results[0].action, ResultAction::None);
        assert!(!plugin.activate(&results[0], &clipboard));
    }
    assert_eq!(clipboard.calls.get(), 0);
}

#[test]
fn hex_query_matches_without_label_help() {
    let catalog = IconCatalog::from_icons(vec![
        Icon::new("LatinCapitalLetter", Codepoint::new(0x41).unwrap()),
        Icon::new("Other", Codepoint::new(0x42).unwrap()),
    ]);
    let exact = |candidate: &str, pattern: &str| candidate == pattern;
    let plugin = GlyphSearch::new(catalog, exact);

    let results = plugin.query("0041");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "LatinCapitalLetter");
    assert_eq!(results[0].subtitle, "&#x0041;");
}

#[test]
fn fuzzy_query_over_sample_catalog() {
    let plugin = GlyphSearch::new(super::sample_catalog(), FuzzyTextMatcher::default());

    let titles: Vec<_> = plugin
        .query("chevron")
        .into_iter()
        .map(|result| result.title)
        .collect();
    assert_eq!(
        titles,
        ["ChevronDown", "ChevronUp", "ChevronLeft", "ChevronRight"]
    );

    let by_hex = plugin.query("E713");
    assert_eq!(by_hex.len(), 1);
    assert_eq!(by_hex[0].title, "Settings");
    assert_eq!(by_hex[0].copy_text.as_deref(), Some("&#xE713;"));
}

#[test]
fn unmatched_query_returns_nothing() {
    let plugin = GlyphSearch::new(super::sample_catalog(), super::substring);
    assert!(plugin.query("definitely-not-an-icon").is_empty());
}

#[test]
fn clipboard_failure_is_reported_as_false() {
    let plugin = GlyphSearch::new(super::sample_catalog(), super::substring);
    let result = &plugin.query("wifi")[0];
    assert!(!plugin.activate(result, &BrokenClipboard));
}

#[test]
fn activation_copies_primary_encoding() {
    let plugin = GlyphSearch::new(super::sample_catalog(), super::substring);
    let clipboard = CountingClipboard {
        calls: Cell::new(0),
    };
    let result = &plugin.query("airplane")[0];

    assert!(plugin.activate(result, &clipboard));
    assert_eq!(clipboard.calls.get(), 1);
}

#[test]
fn multi_word_query_matches_each_term() {
    let plugin = GlyphSearch::new(super::sample_catalog(), FuzzyTextMatcher::default());

    let titles: Vec<_> = plugin
        .query("chevron down")
        .into_iter()
        .map(|r| r.title)
        .collect();
    assert_eq!(titles, ["ChevronDown"]);
}

#[test]
fn best_match_picks_the_exact_label() {
    let plugin = GlyphSearch::new(super::sample_catalog(), FuzzyTextMatcher::default());

    let titles: Vec<_> = plugin.query("pin").into_iter().map(|r| r.title).collect();
    assert_eq!(titles, ["MapPin", "Pin"]);

    let best = plugin.best_match("pin").unwrap();
    assert_eq!(best.title, "Pin");
    assert_eq!(best.subtitle, "&#xE718;");
    assert_eq!(plugin.best_match("chevron down").unwrap().title, "ChevronDown");
}
