//! Glyph lookup for launcher hosts.
//!
//! A user types part of an icon name (`chevron`) or its hex code (`E70D`); the
//! plugin lists every matching glyph of the icon font and copies one of four
//! textual encodings of it:
//!
//! | Format | Example for `U+E700` |
//! |---|---|
//! | [`IconFormat::HtmlHex`] (primary) | `&#xE700;` |
//! | [`IconFormat::HtmlDecimal`] | `&#59136;` |
//! | [`IconFormat::EscapeLower`] | `\uE700` |
//! | [`IconFormat::EscapeBraced`] | `\u{E700}` |
//!
//! Everything host-specific is injected: the fuzzy matcher is a [`TextMatcher`]
//! and the clipboard is a [`Clipboard`]. [`GlyphSearch`] ties the load-once
//! [`IconCatalog`] to a matcher and answers queries and context-menu requests.
//!
//! ```
//! use glyph_search::{FuzzyTextMatcher, GlyphSearch, IconCatalog};
//!
//! let catalog = IconCatalog::from_json_str(
//!     r#"[{"Label": "GlobalNavButton", "Value": 59136}, {"Label": "Wifi", "Value": 59137}]"#,
//! )
//! .unwrap();
//! let plugin = GlyphSearch::new(catalog, FuzzyTextMatcher::default());
//!
//! let results = plugin.query("wifi");
//! assert_eq!(results[0].subtitle, "&#xE701;");
//! assert_eq!(plugin.context_menu(&results[0]).len(), 4);
//! ```

#![forbid(unsafe_code)]

mod catalog;
mod codepoint;
mod format;
mod matcher;
mod plugin;
mod result;

pub use catalog::{DataLoadError, Icon, IconCatalog};
pub use codepoint::{Codepoint, InvalidCodepoint};
pub use format::{encode_raw, IconFormat, ParseFormatError};
pub use matcher::{matches_query, FuzzyTextMatcher, TextMatcher};
pub use plugin::{Clipboard, ClipboardError, GlyphSearch, PLACEHOLDER_TITLE};
pub use result::{Glyph, IconRef, ResultAction, ResultOptions, SearchResult};

pub use glyph_fuzzy::{RankKey, SearchPrecision};
