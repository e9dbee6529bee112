//! # The GHS Label Aggregate
//!
//! The candidate label as handed over by an extraction pipeline: signal
//! word, hazard statements, precautionary statements, pictograms, and
//! identifying text. Created once per chemical record when extraction
//! completes; a reprocessed SDS produces a new label that supersedes the
//! old one rather than mutating it.

use serde::{Deserialize, Serialize};

use crate::category::PrecautionCategory;
use crate::codes::{HCode, PCode};
use crate::pictogram::Pictogram;
use crate::signal::SignalWord;

// ─── Statements ──────────────────────────────────────────────────────

/// A hazard statement: an H-code and its free-text body.
///
/// Unknown codes are retained here and flagged by the validation engine;
/// this type never rejects data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazardStatement {
    /// The hazard code (e.g., `H225`).
    pub code: HCode,
    /// The statement text (e.g., "Highly flammable liquid and vapor").
    pub body: String,
}

impl HazardStatement {
    /// Construct from a code and body.
    pub fn new(code: impl Into<HCode>, body: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            body: body.into(),
        }
    }
}

impl std::fmt::Display for HazardStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.body.is_empty() {
            write!(f, "{}", self.code)
        } else {
            write!(f, "{}: {}", self.code, self.body)
        }
    }
}

/// A precautionary statement: a P-code and its free-text body.
///
/// The lifecycle category is *derived* from the code on demand, never
/// stored, so it cannot go stale if the code string is edited upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrecautionaryStatement {
    /// The precautionary code (e.g., `P210`, `P303+P361+P353`).
    pub code: PCode,
    /// The statement text.
    pub body: String,
}

impl PrecautionaryStatement {
    /// Construct from a code and body.
    pub fn new(code: impl Into<PCode>, body: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            body: body.into(),
        }
    }

    /// The lifecycle category, computed from the code.
    pub fn category(&self) -> PrecautionCategory {
        self.code.category()
    }
}

impl std::fmt::Display for PrecautionaryStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.body.is_empty() {
            write!(f, "{}", self.code)
        } else {
            write!(f, "{}: {}", self.code, self.body)
        }
    }
}

// ─── Label ───────────────────────────────────────────────────────────

/// A candidate GHS label for a single chemical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GhsLabel {
    /// Product name or identifier (SDS Section 1).
    pub product_identifier: String,
    /// The declared signal word.
    pub signal_word: SignalWord,
    /// Declared hazard statements, in source order.
    pub hazard_statements: Vec<HazardStatement>,
    /// Declared precautionary statements, in source order.
    pub precautionary_statements: Vec<PrecautionaryStatement>,
    /// Declared pictogram set.
    pub pictograms: Vec<Pictogram>,
    /// Supplier/manufacturer name and contact (SDS Section 1).
    pub supplier_info: String,
    /// The SDS revision or issuing date, verbatim from the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sds_date: Option<String>,
}

impl GhsLabel {
    /// The declared precautionary statements grouped by lifecycle
    /// category, preserving source order within each group.
    pub fn statements_by_category(
        &self,
    ) -> impl Iterator<Item = (PrecautionCategory, Vec<&PrecautionaryStatement>)> {
        PrecautionCategory::all().iter().map(move |cat| {
            let group: Vec<&PrecautionaryStatement> = self
                .precautionary_statements
                .iter()
                .filter(|s| s.category() == *cat)
                .collect();
            (*cat, group)
        })
    }
}
