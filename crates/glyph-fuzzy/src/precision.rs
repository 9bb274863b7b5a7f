use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum normalized score (see [`crate::MatchScore::percent`]) a match needs
/// before it is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchPrecision {
    /// Every subsequence match is accepted.
    None,
    Low,
    #[default]
    Regular,
}

impl SearchPrecision {
    pub const fn threshold(self) -> u8 {
        match self {
            SearchPrecision::None => 0,
            SearchPrecision::Low => 20,
            SearchPrecision::Regular => 50,
        }
    }

    #[inline]
    pub const fn is_met(self, percent: u8) -> bool {
        percent >= self.threshold()
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            SearchPrecision::None => "none",
            SearchPrecision::Low => "low",
            SearchPrecision::Regular => "regular",
        }
    }
}

impl fmt::Display for SearchPrecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown search precision `{0}` (expected none, low or regular)")]
pub struct ParsePrecisionError(String);

impl FromStr for SearchPrecision {
    type Err = ParsePrecisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(SearchPrecision::None),
            "low" => Ok(SearchPrecision::Low),
            "regular" => Ok(SearchPrecision::Regular),
            _ => Err(ParsePrecisionError(s.to_owned())),
        }
    }
}
