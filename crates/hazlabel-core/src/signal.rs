//! # Signal Words
//!
//! The GHS signal word vocabulary. A label carries exactly one value;
//! `None` is only valid when no hazard statement implies a stronger word.
//!
//! ## Design
//!
//! The derived `Ord` encodes hazard severity (`None < Warning < Danger`),
//! so the maximum implied signal word over a hazard set is a plain
//! `Iterator::max`. Under-labeling (declared < implied) is the
//! safety-relevant direction; over-labeling is permitted.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The GHS signal word on a label.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum SignalWord {
    /// No signal word (valid only for labels with no Danger/Warning hazards).
    #[default]
    None,
    /// "Warning" — harmful/irritant hazard classes.
    Warning,
    /// "Danger" — fatal/toxic/corrosive hazard classes.
    Danger,
}

impl SignalWord {
    /// All signal words in ascending severity order.
    pub fn all() -> &'static [SignalWord] {
        &[Self::None, Self::Warning, Self::Danger]
    }

    /// The label-facing text for this signal word.
    ///
    /// Matches the wire format used by extraction pipelines
    /// ("Danger", "Warning", "None").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Warning => "Warning",
            Self::Danger => "Danger",
        }
    }
}

impl std::fmt::Display for SignalWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SignalWord {
    type Err = CoreError;

    /// Parse a signal word, case-insensitively. An empty string parses
    /// as `None` (extraction pipelines emit "" for absent signal words).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "danger" => Ok(Self::Danger),
            "warning" => Ok(Self::Warning),
            "none" | "" => Ok(Self::None),
            other => Err(CoreError::UnknownSignalWord(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(SignalWord::None < SignalWord::Warning);
        assert!(SignalWord::Warning < SignalWord::Danger);
        let max = [SignalWord::Warning, SignalWord::Danger, SignalWord::None]
            .into_iter()
            .max();
        assert_eq!(max, Some(SignalWord::Danger));
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("Danger".parse::<SignalWord>().unwrap(), SignalWord::Danger);
        assert_eq!("warning".parse::<SignalWord>().unwrap(), SignalWord::Warning);
        assert_eq!("NONE".parse::<SignalWord>().unwrap(), SignalWord::None);
        assert_eq!("".parse::<SignalWord>().unwrap(), SignalWord::None);
        assert!("hazard".parse::<SignalWord>().is_err());
    }

    #[test]
    fn test_serde_format() {
        assert_eq!(
            serde_json::to_string(&SignalWord::Danger).unwrap(),
            "\"danger\""
        );
    }
}
