//! Market regions selectable for an analysis.
//!
//! The set is closed: only these codes can reach the prompt builder.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;

/// A supported search market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter)]
pub enum Region {
    #[default]
    Us,
    Es,
    Mx,
    Uk,
    Ar,
    Co,
    Br,
}

/// Error returned for a region code outside the supported table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown region code {0:?} (expected one of US, ES, MX, UK, AR, CO, BR)")]
pub struct UnknownRegion(pub String);

/// Serializable row of the region table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
}

impl Region {
    pub fn code(&self) -> &'static str {
        match self {
            Region::Us => "US",
            Region::Es => "ES",
            Region::Mx => "MX",
            Region::Uk => "UK",
            Region::Ar => "AR",
            Region::Co => "CO",
            Region::Br => "BR",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Region::Us => "United States",
            Region::Es => "España",
            Region::Mx => "México",
            Region::Uk => "United Kingdom",
            Region::Ar => "Argentina",
            Region::Co => "Colombia",
            Region::Br => "Brasil",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Region::Us => "🇺🇸",
            Region::Es => "🇪🇸",
            Region::Mx => "🇲🇽",
            Region::Uk => "🇬🇧",
            Region::Ar => "🇦🇷",
            Region::Co => "🇨🇴",
            Region::Br => "🇧🇷",
        }
    }

    pub fn info(&self) -> RegionInfo {
        RegionInfo {
            code: self.code(),
            name: self.name(),
            flag: self.flag(),
        }
    }

    /// The full region table in display order.
    pub fn table() -> Vec<RegionInfo> {
        Region::iter().map(|region| region.info()).collect()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Region::iter()
            .find(|region| region.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| UnknownRegion(s.to_string()))
    }
}

impl Serialize for Region {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Region {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_region_is_us() {
        assert_eq!(Region::default(), Region::Us);
    }

    #[test]
    fn test_table_order_and_contents() {
        let codes: Vec<&str> = Region::table().iter().map(|r| r.code).collect();
        assert_eq!(codes, ["US", "ES", "MX", "UK", "AR", "CO", "BR"]);
        assert_eq!(Region::Es.name(), "España");
        assert_eq!(Region::Uk.flag(), "🇬🇧");
    }

    #[test]
    fn test_parse_codes() {
        assert_eq!("br".parse::<Region>(), Ok(Region::Br));
        assert_eq!(" MX".parse::<Region>(), Ok(Region::Mx));
        assert_eq!(
            "FR".parse::<Region>(),
            Err(UnknownRegion("FR".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(serde_json::to_string(&Region::Co).unwrap(), "\"CO\"");
        let region: Region = serde_json::from_str("\"ar\"").unwrap();
        assert_eq!(region, Region::Ar);
        assert!(serde_json::from_str::<Region>("\"DE\"").is_err());
    }
}
