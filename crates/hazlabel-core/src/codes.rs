//! # GHS Code Newtypes
//!
//! Newtype wrappers for hazard (H) and precautionary (P) codes. These
//! prevent accidental code confusion — you cannot pass a `PCode` where an
//! `HCode` is expected.
//!
//! ## Design
//!
//! Construction is infallible by design. Extraction pipelines hand this
//! crate imperfect data, and an unknown or malformed code must survive
//! long enough to be reported as a validation issue rather than being
//! rejected at the type boundary. Well-formedness is exposed as a
//! predicate instead.

use serde::{Deserialize, Serialize};

use crate::category::PrecautionCategory;

// ─── Hazard Codes ────────────────────────────────────────────────────

/// A GHS hazard statement code (e.g., `H225`).
///
/// Canonical form is `H` followed by three digits, with an optional
/// trailing letter for supplemental codes (e.g., `H360FD`). Combined
/// codes join components with `+` (e.g., `H300+H310`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HCode(String);

impl HCode {
    /// Wrap a raw code string, trimming surrounding whitespace and
    /// uppercasing the leading letter.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(normalize_code(raw.into()))
    }

    /// The code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the code matches the canonical `H\d{3}` shape
    /// (with optional trailing letters, possibly `+`-combined).
    pub fn is_wellformed(&self) -> bool {
        self.0.split('+').all(is_wellformed_component_h)
    }

    /// The component codes of a combined code, in order.
    ///
    /// A simple code yields itself as the only component.
    pub fn components(&self) -> impl Iterator<Item = HCode> + '_ {
        self.0.split('+').map(HCode::new)
    }
}

impl std::fmt::Display for HCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

// ─── Precautionary Codes ─────────────────────────────────────────────

/// A GHS precautionary statement code (e.g., `P210`, `P303+P361+P353`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PCode(String);

impl PCode {
    /// Wrap a raw code string, trimming surrounding whitespace, removing
    /// interior spaces around `+`, and uppercasing leading letters.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(normalize_code(raw.into()))
    }

    /// The code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether every component matches the canonical `P\d{3}` shape.
    pub fn is_wellformed(&self) -> bool {
        self.0.split('+').all(is_wellformed_component_p)
    }

    /// The component codes of a combined code, in order.
    pub fn components(&self) -> impl Iterator<Item = PCode> + '_ {
        self.0.split('+').map(PCode::new)
    }

    /// The lifecycle category derived from this code.
    ///
    /// Pure and total: depends only on the code string, never on context.
    /// See [`PrecautionCategory::classify`] for the prefix mapping.
    pub fn category(&self) -> PrecautionCategory {
        PrecautionCategory::classify(&self.0)
    }
}

impl std::fmt::Display for PCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────

/// Trim, strip interior spaces (so `P301 + P310` keys as `P301+P310`),
/// and uppercase ASCII letters.
fn normalize_code(raw: String) -> String {
    raw.trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

fn is_wellformed_component_h(part: &str) -> bool {
    let bytes = part.as_bytes();
    if bytes.len() < 4 || bytes[0] != b'H' {
        return false;
    }
    let digits = &bytes[1..4];
    if !digits.iter().all(u8::is_ascii_digit) {
        return false;
    }
    // Optional trailing letters for supplemental codes (H360F, H360FD).
    bytes[4..].iter().all(u8::is_ascii_uppercase)
}

fn is_wellformed_component_p(part: &str) -> bool {
    let bytes = part.as_bytes();
    bytes.len() == 4 && bytes[0] == b'P' && bytes[1..4].iter().all(u8::is_ascii_digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hcode_normalization() {
        assert_eq!(HCode::new(" h225 ").as_str(), "H225");
        assert_eq!(HCode::new("H300 + H310").as_str(), "H300+H310");
    }

    #[test]
    fn test_hcode_wellformed() {
        assert!(HCode::new("H225").is_wellformed());
        assert!(HCode::new("H360FD").is_wellformed());
        assert!(HCode::new("H300+H310").is_wellformed());
        assert!(!HCode::new("EUH031").is_wellformed());
        assert!(!HCode::new("H22").is_wellformed());
        assert!(!HCode::new("").is_wellformed());
        assert!(!HCode::new("garbage").is_wellformed());
    }

    #[test]
    fn test_pcode_wellformed() {
        assert!(PCode::new("P210").is_wellformed());
        assert!(PCode::new("P303+P361+P353").is_wellformed());
        assert!(!PCode::new("P21").is_wellformed());
        assert!(!PCode::new("H225").is_wellformed());
    }

    #[test]
    fn test_components() {
        let combined = PCode::new("P303+P361+P353");
        let parts: Vec<String> = combined
            .components()
            .map(|c| c.as_str().to_string())
            .collect();
        assert_eq!(parts, vec!["P303", "P361", "P353"]);

        let simple = HCode::new("H225");
        assert_eq!(simple.components().count(), 1);
    }

    #[test]
    fn test_serde_is_transparent_string() {
        let code = HCode::new("H225");
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"H225\"");
        let back: HCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);
    }
}
