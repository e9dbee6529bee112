//! # GHS Pictograms
//!
//! The nine canonical GHS pictogram codes. Pictogram identity is
//! invariant: a given H-code always maps to the same fixed pictogram set
//! in the reference table, and a label's pictogram set is the
//! deduplicated union across its hazard statements.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One of the nine canonical GHS pictograms.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Pictogram {
    /// GHS01 — Exploding bomb.
    #[serde(rename = "GHS01")]
    Ghs01,
    /// GHS02 — Flame.
    #[serde(rename = "GHS02")]
    Ghs02,
    /// GHS03 — Flame over circle (oxidizer).
    #[serde(rename = "GHS03")]
    Ghs03,
    /// GHS04 — Gas cylinder.
    #[serde(rename = "GHS04")]
    Ghs04,
    /// GHS05 — Corrosion.
    #[serde(rename = "GHS05")]
    Ghs05,
    /// GHS06 — Skull and crossbones (acute toxicity).
    #[serde(rename = "GHS06")]
    Ghs06,
    /// GHS07 — Exclamation mark.
    #[serde(rename = "GHS07")]
    Ghs07,
    /// GHS08 — Health hazard.
    #[serde(rename = "GHS08")]
    Ghs08,
    /// GHS09 — Environment.
    #[serde(rename = "GHS09")]
    Ghs09,
}

impl Pictogram {
    /// All nine pictograms in canonical code order.
    pub fn all() -> &'static [Pictogram] {
        &[
            Self::Ghs01,
            Self::Ghs02,
            Self::Ghs03,
            Self::Ghs04,
            Self::Ghs05,
            Self::Ghs06,
            Self::Ghs07,
            Self::Ghs08,
            Self::Ghs09,
        ]
    }

    /// The canonical code string for this pictogram.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ghs01 => "GHS01",
            Self::Ghs02 => "GHS02",
            Self::Ghs03 => "GHS03",
            Self::Ghs04 => "GHS04",
            Self::Ghs05 => "GHS05",
            Self::Ghs06 => "GHS06",
            Self::Ghs07 => "GHS07",
            Self::Ghs08 => "GHS08",
            Self::Ghs09 => "GHS09",
        }
    }

    /// The human-readable symbol name.
    pub fn symbol_name(&self) -> &'static str {
        match self {
            Self::Ghs01 => "Exploding bomb",
            Self::Ghs02 => "Flame",
            Self::Ghs03 => "Flame over circle",
            Self::Ghs04 => "Gas cylinder",
            Self::Ghs05 => "Corrosion",
            Self::Ghs06 => "Skull and crossbones",
            Self::Ghs07 => "Exclamation mark",
            Self::Ghs08 => "Health hazard",
            Self::Ghs09 => "Environment",
        }
    }
}

impl std::fmt::Display for Pictogram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Pictogram {
    type Err = CoreError;

    /// Parse a canonical pictogram code, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GHS01" => Ok(Self::Ghs01),
            "GHS02" => Ok(Self::Ghs02),
            "GHS03" => Ok(Self::Ghs03),
            "GHS04" => Ok(Self::Ghs04),
            "GHS05" => Ok(Self::Ghs05),
            "GHS06" => Ok(Self::Ghs06),
            "GHS07" => Ok(Self::Ghs07),
            "GHS08" => Ok(Self::Ghs08),
            "GHS09" => Ok(Self::Ghs09),
            other => Err(CoreError::UnknownPictogram(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_count_and_unique() {
        let all = Pictogram::all();
        assert_eq!(all.len(), 9);
        let mut seen = std::collections::HashSet::new();
        for p in all {
            assert!(seen.insert(p), "Duplicate pictogram: {p}");
        }
    }

    #[test]
    fn test_as_str_roundtrip() {
        for p in Pictogram::all() {
            let parsed: Pictogram = p.as_str().parse().unwrap();
            assert_eq!(*p, parsed);
        }
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("GHS10".parse::<Pictogram>().is_err());
        assert!("".parse::<Pictogram>().is_err());
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for p in Pictogram::all() {
            let json = serde_json::to_string(p).unwrap();
            assert_eq!(json, format!("\"{}\"", p.as_str()));
        }
    }
}
