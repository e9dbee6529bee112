//! # Precautionary Lifecycle Categories
//!
//! The four GHS lifecycle categories for precautionary statements, with
//! the numeric-prefix classification rule.
//!
//! ## Design
//!
//! Classification is total: every input string lands in a category, with
//! `Disposal` as the catch-all for `5xx` prefixes and unparseable codes.
//! Grouping and display logic therefore never needs a "none" branch.

use serde::{Deserialize, Serialize};

/// Lifecycle category of a precautionary statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrecautionCategory {
    /// General and prevention statements (P1xx, P2xx).
    Prevention,
    /// Response statements (P3xx).
    Response,
    /// Storage statements (P4xx).
    Storage,
    /// Disposal statements (P5xx) and the catch-all for anything else.
    Disposal,
}

impl PrecautionCategory {
    /// All categories in GHS label order.
    pub fn all() -> &'static [PrecautionCategory] {
        &[
            Self::Prevention,
            Self::Response,
            Self::Storage,
            Self::Disposal,
        ]
    }

    /// Classify a raw code string by the leading numeral of its first
    /// digit group.
    ///
    /// Mapping: `1`/`2` → Prevention, `3` → Response, `4` → Storage,
    /// anything else (including `5` and malformed input) → Disposal.
    /// Total and deterministic, so it is safe to memoize.
    pub fn classify(code: &str) -> Self {
        let first_digit = code.chars().find(char::is_ascii_digit);
        match first_digit {
            Some('1') | Some('2') => Self::Prevention,
            Some('3') => Self::Response,
            Some('4') => Self::Storage,
            _ => Self::Disposal,
        }
    }

    /// The snake_case string identifier for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prevention => "prevention",
            Self::Response => "response",
            Self::Storage => "storage",
            Self::Disposal => "disposal",
        }
    }
}

impl std::fmt::Display for PrecautionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_prefix_ranges() {
        assert_eq!(
            PrecautionCategory::classify("P210"),
            PrecautionCategory::Prevention
        );
        assert_eq!(
            PrecautionCategory::classify("P102"),
            PrecautionCategory::Prevention
        );
        assert_eq!(
            PrecautionCategory::classify("P303"),
            PrecautionCategory::Response
        );
        assert_eq!(
            PrecautionCategory::classify("P405"),
            PrecautionCategory::Storage
        );
        assert_eq!(
            PrecautionCategory::classify("P501"),
            PrecautionCategory::Disposal
        );
    }

    #[test]
    fn test_classify_is_total() {
        // Malformed input still lands in a category.
        assert_eq!(
            PrecautionCategory::classify("garbage"),
            PrecautionCategory::Disposal
        );
        assert_eq!(
            PrecautionCategory::classify(""),
            PrecautionCategory::Disposal
        );
        assert_eq!(
            PrecautionCategory::classify("P"),
            PrecautionCategory::Disposal
        );
    }

    #[test]
    fn test_combined_code_uses_first_component() {
        assert_eq!(
            PrecautionCategory::classify("P303+P361+P353"),
            PrecautionCategory::Response
        );
        assert_eq!(
            PrecautionCategory::classify("P301+P310"),
            PrecautionCategory::Response
        );
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for cat in PrecautionCategory::all() {
            let json = serde_json::to_string(cat).unwrap();
            assert_eq!(json, format!("\"{}\"", cat.as_str()));
        }
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Totality: any string classifies, and classification is
            // stable across repeated calls.
            #[test]
            fn classify_total_and_deterministic(code in ".*") {
                let first = PrecautionCategory::classify(&code);
                let second = PrecautionCategory::classify(&code);
                prop_assert_eq!(first, second);
            }

            // Canonical P-codes follow the prefix ranges exactly.
            #[test]
            fn classify_follows_prefix(n in 100u32..600) {
                let code = format!("P{n}");
                let expected = match n / 100 {
                    1 | 2 => PrecautionCategory::Prevention,
                    3 => PrecautionCategory::Response,
                    4 => PrecautionCategory::Storage,
                    _ => PrecautionCategory::Disposal,
                };
                prop_assert_eq!(PrecautionCategory::classify(&code), expected);
            }
        }
    }
}
