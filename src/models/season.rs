//! Season tag attached to every item.

use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// When an item is typically used.
///
/// Stored on disk as a single-character code (`s`, `w`, `n`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Season {
    /// Summer items
    #[serde(rename = "s")]
    Summer,
    /// Winter items
    #[serde(rename = "w")]
    Winter,
    /// Items used all year round
    #[default]
    #[serde(rename = "n")]
    Neutral,
}

impl Season {
    /// All seasons, in display order.
    pub const ALL: [Self; 3] = [Self::Summer, Self::Winter, Self::Neutral];

    /// Single-character code used in the YAML file.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Summer => 's',
            Self::Winter => 'w',
            Self::Neutral => 'n',
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Summer => "summer",
            Self::Winter => "winter",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Season {
    type Err = StoreError;

    /// Parses a season code. Surrounding whitespace and case are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "s" => Ok(Self::Summer),
            "w" => Ok(Self::Winter),
            "n" => Ok(Self::Neutral),
            _ => Err(StoreError::InvalidSeason(s.to_string())),
        }
    }
}
