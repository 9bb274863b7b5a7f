//! Result records handed back to the host.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::catalog::{Icon, IconCatalog};
use crate::codepoint::Codepoint;
use crate::format::IconFormat;

/// Typed back-reference from a result to the icon it was built from.
///
/// A reference only resolves against a catalog whose entry at `index` still has
/// the same codepoint, so a result replayed from another catalog (or forged by a
/// host) resolves to nothing instead of to an unrelated icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IconRef {
    index: usize,
    codepoint: Codepoint,
}

impl IconRef {
    pub(crate) fn new(index: usize, icon: &Icon) -> Self {
        Self {
            index,
            codepoint: icon.codepoint(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn codepoint(&self) -> Codepoint {
        self.codepoint
    }

    pub fn resolve<'a>(&self, catalog: &'a IconCatalog) -> Option<&'a Icon> {
        catalog
            .get(self.index)
            .filter(|icon| icon.codepoint() == self.codepoint)
    }
}

/// How the host should render a result's glyph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Glyph {
    pub font_family: String,
    pub character: char,
}

/// What happens when the user activates a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResultAction {
    /// Copy [`SearchResult::copy_text`] to the clipboard.
    CopyToClipboard,
    /// Informational entry; activating it does nothing.
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub title: String,
    pub subtitle: String,
    pub icon_path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glyph: Option<Glyph>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<IconFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconRef>,
    pub action: ResultAction,
}

/// Rendering options shared by every result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultOptions {
    pub font_family: String,
    pub icon_path: PathBuf,
}

impl Default for ResultOptions {
    fn default() -> Self {
        Self {
            font_family: "Segoe Fluent Icons".to_owned(),
            icon_path: PathBuf::from("icon.png"),
        }
    }
}

impl SearchResult {
    pub(crate) fn placeholder(title: &str, options: &ResultOptions) -> Self {
        Self {
            title: title.to_owned(),
            subtitle: String::new(),
            icon_path: options.icon_path.clone(),
            copy_text: None,
            glyph: None,
            format: None,
            icon: None,
            action: ResultAction::None,
        }
    }

    /// Builds the result for `icon` (at `index` in its catalog) encoded as `format`.
    pub fn for_icon(
        index: usize,
        icon: &Icon,
        format: IconFormat,
        options: &ResultOptions,
    ) -> Self {
        let encoded = format.encode(icon.codepoint());
        Self {
            title: icon.label().to_owned(),
            subtitle: encoded.clone(),
            icon_path: options.icon_path.clone(),
            copy_text: Some(encoded),
            glyph: Some(Glyph {
                font_family: options.font_family.clone(),
                character: icon.codepoint().as_char(),
            }),
            format: Some(format),
            icon: Some(IconRef::new(index, icon)),
            action: ResultAction::CopyToClipboard,
        }
    }

    /// The result shown in the main list; always [`IconFormat::PRIMARY`].
    pub fn primary(index: usize, icon: &Icon, options: &ResultOptions) -> Self {
        Self::for_icon(index, icon, IconFormat::PRIMARY, options)
    }

    /// One result per format, in [`IconFormat::ALL`] order.
    pub fn alternates(index: usize, icon: &Icon, options: &ResultOptions) -> [Self; 4] {
        IconFormat::ALL.map(|format| Self::for_icon(index, icon, format, options))
    }
}
