use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Raised when a value is not a Unicode scalar value (above `U+10FFFF` or a
/// surrogate in `U+D800..=U+DFFF`).
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("{0:#06X} is not a Unicode scalar value")]
pub struct InvalidCodepoint(pub u64);

/// A validated Unicode scalar value.
///
/// Every `Codepoint` can be rendered as a `char`, so encoding one is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Codepoint(char);

impl Codepoint {
    pub fn new(value: u32) -> Result<Self, InvalidCodepoint> {
        char::from_u32(value)
            .map(Codepoint)
            .ok_or(InvalidCodepoint(u64::from(value)))
    }

    #[inline]
    pub const fn value(self) -> u32 {
        self.0 as u32
    }

    #[inline]
    pub const fn as_char(self) -> char {
        self.0
    }

    /// Uppercase hex, zero-padded to at least 4 digits (`0041`, `E700`, `1F600`).
    pub fn hex(self) -> String {
        format!("{:04X}", self.value())
    }

    /// Parses a bare hex codepoint, optionally prefixed with `0x` or `U+`.
    pub fn parse_hex(text: &str) -> Option<Self> {
        let text = text.trim();
        let digits = ["0x", "0X", "U+", "u+"]
            .iter()
            .find_map(|prefix| text.strip_prefix(prefix))
            .unwrap_or(text);
        Self::from_hex_digits(digits)
    }

    pub(crate) fn from_hex_digits(digits: &str) -> Option<Self> {
        if digits.is_empty() || digits.len() > 8 || !digits.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return None;
        }
        u32::from_str_radix(digits, 16)
            .ok()
            .and_then(|value| Self::new(value).ok())
    }
}

impl TryFrom<u32> for Codepoint {
    type Error = InvalidCodepoint;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<u64> for Codepoint {
    type Error = InvalidCodepoint;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .map_err(|_| InvalidCodepoint(value))
            .and_then(Self::new)
    }
}

impl From<char> for Codepoint {
    fn from(ch: char) -> Self {
        Codepoint(ch)
    }
}

impl fmt::Display for Codepoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", self.value())
    }
}

impl Serialize for Codepoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.value())
    }
}

impl<'de> Deserialize<'de> for Codepoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u64::deserialize(deserializer)?;
        Codepoint::try_from(value).map_err(serde::de::Error::custom)
    }
}
