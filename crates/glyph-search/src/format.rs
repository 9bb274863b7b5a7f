//! Textual encodings of a codepoint.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codepoint::{Codepoint, InvalidCodepoint};

/// The four supported escape formats.
///
/// `HEX` below is uppercase hex zero-padded to at least 4 digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconFormat {
    /// `&#xHEX;`
    HtmlHex,
    /// `&#DECIMAL;`
    HtmlDecimal,
    /// `\uHEX`
    EscapeLower,
    /// `\u{HEX}`
    EscapeBraced,
}

impl IconFormat {
    /// Every format, in the order alternate results are listed.
    pub const ALL: [IconFormat; 4] = [
        IconFormat::HtmlHex,
        IconFormat::HtmlDecimal,
        IconFormat::EscapeLower,
        IconFormat::EscapeBraced,
    ];

    /// The format copied on direct selection.
    pub const PRIMARY: IconFormat = IconFormat::HtmlHex;

    pub fn encode(self, codepoint: Codepoint) -> String {
        match self {
            IconFormat::HtmlHex => format!("&#x{};", codepoint.hex()),
            IconFormat::HtmlDecimal => format!("&#{};", codepoint.value()),
            IconFormat::EscapeLower => format!("\\u{}", codepoint.hex()),
            IconFormat::EscapeBraced => format!("\\u{{{}}}", codepoint.hex()),
        }
    }

    /// Decodes text produced by any of the formats.
    ///
    /// Hex digits are accepted in either case, so `&#xe700;` parses even though
    /// [`IconFormat::encode`] never emits it.
    pub fn parse(text: &str) -> Option<(IconFormat, Codepoint)> {
        let text = text.trim();

        if let Some(rest) = text.strip_prefix("&#") {
            let body = rest.strip_suffix(';')?;
            return match body.strip_prefix(['x', 'X']) {
                Some(hex) => Codepoint::from_hex_digits(hex).map(|cp| (IconFormat::HtmlHex, cp)),
                None => parse_decimal(body).map(|cp| (IconFormat::HtmlDecimal, cp)),
            };
        }

        let rest = text.strip_prefix("\\u")?;
        match rest.strip_prefix('{') {
            Some(braced) => {
                let hex = braced.strip_suffix('}')?;
                Codepoint::from_hex_digits(hex).map(|cp| (IconFormat::EscapeBraced, cp))
            }
            None => Codepoint::from_hex_digits(rest).map(|cp| (IconFormat::EscapeLower, cp)),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            IconFormat::HtmlHex => "html-hex",
            IconFormat::HtmlDecimal => "html-decimal",
            IconFormat::EscapeLower => "escape-lower",
            IconFormat::EscapeBraced => "escape-braced",
        }
    }
}

fn parse_decimal(digits: &str) -> Option<Codepoint> {
    if digits.is_empty() || digits.len() > 10 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits
        .parse::<u32>()
        .ok()
        .and_then(|value| Codepoint::new(value).ok())
}

/// Encodes a raw integer, rejecting values that are not Unicode scalar values.
pub fn encode_raw(value: u32, format: IconFormat) -> Result<String, InvalidCodepoint> {
    Codepoint::new(value).map(|codepoint| format.encode(codepoint))
}

impl fmt::Display for IconFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown format `{0}` (expected html-hex, html-decimal, escape-lower or escape-braced)")]
pub struct ParseFormatError(String);

impl FromStr for IconFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        IconFormat::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseFormatError(s.to_owned()))
    }
}
