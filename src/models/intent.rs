//! Search intent classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;

/// Likely purpose behind a search query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Intent {
    /// Looking for information
    Informational,
    /// Looking for a specific site or brand
    Navigational,
    /// Researching before a purchase
    Commercial,
    /// Ready to buy or act
    Transactional,
}

/// Error returned when a label does not name one of the four intents.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search intent: {0:?}")]
pub struct UnknownIntent(pub String);

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Informational => "Informational",
            Intent::Navigational => "Navigational",
            Intent::Commercial => "Commercial",
            Intent::Transactional => "Transactional",
        }
    }

    /// Single-letter badge used in compact tables.
    pub fn initial(&self) -> char {
        match self {
            Intent::Informational => 'I',
            Intent::Navigational => 'N',
            Intent::Commercial => 'C',
            Intent::Transactional => 'T',
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intent {
    type Err = UnknownIntent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Intent::iter()
            .find(|intent| intent.as_str().eq_ignore_ascii_case(label))
            .ok_or_else(|| UnknownIntent(s.to_string()))
    }
}

impl Serialize for Intent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Intent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}
