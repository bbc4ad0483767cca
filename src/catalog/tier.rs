//! Tier discriminator for the package catalog.
//!
//! `PackageTier` is the closed set of tiers the factory maps. The wire form
//! is the lowercase token used by the CLIs and the dump record. Unknown
//! tokens are rejected at this boundary with `UnrecognizedTier` rather than
//! carried along, which keeps `resolve` total over the declared enum.

use crate::catalog::error::CatalogError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Discriminator selecting one of the packages the factory constructs.
///
/// Platinum deliberately has no entry here: the package type exists as a
/// stub, but the factory does not map it, and that asymmetry is part of the
/// contract.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum PackageTier {
    Standard,
    Premium,
}

impl PackageTier {
    /// Declared tiers in catalog order.
    pub const ALL: [PackageTier; 2] = [PackageTier::Standard, PackageTier::Premium];

    /// Stable lowercase token used on the CLI and in emitted records.
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageTier::Standard => "standard",
            PackageTier::Premium => "premium",
        }
    }
}

impl fmt::Display for PackageTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageTier {
    type Err = CatalogError;

    /// Tokens are trimmed and ASCII-lowercased before matching, so `STANDARD`
    /// and ` premium ` both resolve; the accepted set itself stays closed.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(PackageTier::Standard),
            "premium" => Ok(PackageTier::Premium),
            _ => Err(CatalogError::UnrecognizedTier {
                token: value.trim().to_string(),
            }),
        }
    }
}

impl Serialize for PackageTier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PackageTier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_round_trips_wire_tokens() {
        for tier in PackageTier::ALL {
            let json = serde_json::to_string(&tier).unwrap();
            assert_eq!(json.trim_matches('"'), tier.as_str());
            let back: PackageTier = serde_json::from_str(&json).unwrap();
            assert_eq!(back, tier);
        }
    }

    #[test]
    fn parse_normalizes_case_and_whitespace() {
        assert_eq!("STANDARD".parse::<PackageTier>().unwrap(), PackageTier::Standard);
        assert_eq!(" premium ".parse::<PackageTier>().unwrap(), PackageTier::Premium);
        assert_eq!("Premium".parse::<PackageTier>().unwrap(), PackageTier::Premium);
    }

    #[test]
    fn parse_rejects_tokens_outside_the_declared_set() {
        for token in ["999", "platinum", "", "standard premium"] {
            let err = token.parse::<PackageTier>().expect_err("token must not parse");
            assert_eq!(
                err,
                CatalogError::UnrecognizedTier {
                    token: token.trim().to_string(),
                }
            );
        }
    }

    #[test]
    fn deserialization_rejects_unknown_tokens() {
        let err = serde_json::from_str::<PackageTier>("\"platinum\"")
            .expect_err("platinum has no discriminator");
        assert!(err.to_string().contains("unrecognized package tier 'platinum'"));
    }

    #[test]
    fn display_matches_wire_token() {
        assert_eq!(PackageTier::Standard.to_string(), "standard");
        assert_eq!(PackageTier::Premium.to_string(), "premium");
    }
}
