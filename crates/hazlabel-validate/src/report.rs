//! # Validation Report Types
//!
//! The issue vocabulary and the aggregate result the engine returns.
//!
//! ## Design
//!
//! The engine never fails: any label, however broken, produces a
//! `ValidationResult`. Problems are carried as ordered [`ValidationIssue`]
//! entries, and the compliance verdict is derived from issue severities
//! at aggregation time rather than tracked incrementally.

use serde::{Deserialize, Serialize};

use hazlabel_core::{HCode, HazardStatement, PCode, Pictogram, PrecautionaryStatement, Severity, SignalWord};

// ─── Issues ──────────────────────────────────────────────────────────

/// What kind of problem an issue reports. Closed set; every check in the
/// engine maps to exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// A declared hazard code is not in the reference table.
    UnknownHazardCode,
    /// A pictogram implied by the hazard codes is not declared.
    MissingPictogram,
    /// A declared pictogram is not implied by any hazard code.
    ExtraPictogram,
    /// The declared signal word is weaker than the hazards require.
    SignalWordTooWeak,
    /// The declared signal word is stronger than the hazards require.
    SignalWordOverLabeled,
    /// A P-code regulation requires for a declared hazard is absent.
    MissingRequiredPCode,
    /// The same hazard code appears more than once.
    DuplicateHazardCode,
    /// Two declared precautionary codes contradict each other.
    ContradictoryPrecautions,
    /// A declared precautionary code is not in the reference table.
    UnknownPrecautionCode,
    /// A statement body differs from the official reference text.
    StatementTextMismatch,
}

/// One finding from the validation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// What kind of problem this is.
    pub kind: IssueKind,
    /// How severe the finding is.
    pub severity: Severity,
    /// Human-readable description, self-contained.
    pub message: String,
    /// A concrete remediation, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// The hazard code the issue concerns, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h_code: Option<HCode>,
    /// The precautionary code the issue concerns, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p_code: Option<PCode>,
    /// The label field the issue concerns (e.g., `signal_word`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ValidationIssue {
    /// Construct an issue with no code attribution.
    pub fn new(kind: IssueKind, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            message: message.into(),
            suggestion: None,
            h_code: None,
            p_code: None,
            field: None,
        }
    }

    /// Attach a remediation suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Attribute the issue to a hazard code.
    pub fn for_h_code(mut self, code: HCode) -> Self {
        self.h_code = Some(code);
        self
    }

    /// Attribute the issue to a precautionary code.
    pub fn for_p_code(mut self, code: PCode) -> Self {
        self.p_code = Some(code);
        self
    }

    /// Attribute the issue to a label field.
    pub fn on_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.severity, self.message)
    }
}

// ─── Supplements ─────────────────────────────────────────────────────

/// An EU supplemental hazard statement injected by product identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplementalHazard {
    /// The EUH code (e.g., `EUH031`).
    pub code: String,
    /// Official statement text.
    pub statement: String,
}

impl std::fmt::Display for SupplementalHazard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.statement)
    }
}

/// The SDS currency assessment. Absent from the result when the label
/// carries no parseable date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SdsAgeReport {
    /// Age of the SDS in years, to one decimal place.
    pub years_old: f64,
    /// Whether the SDS is past the review threshold.
    pub is_outdated: bool,
    /// Advisory text, present when outdated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

// ─── Aggregate result ────────────────────────────────────────────────

/// Everything the validation engine has to say about one label.
///
/// Issue order is deterministic: findings appear in check order, and
/// within a check in the order the offending codes appear on the label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// No error or critical findings, and the signal word holds.
    pub is_valid: bool,
    /// Whether a human must sign off before the label prints.
    /// Always the complement of `is_valid`.
    pub needs_review: bool,
    /// All findings, in deterministic order.
    pub issues: Vec<ValidationIssue>,
    /// Required P-codes absent from the label, deduplicated, in the
    /// order their triggering hazards appear.
    pub missing_p_codes: Vec<PCode>,
    /// Whether the declared signal word is at least as strong as the
    /// hazards require.
    pub signal_word_valid: bool,
    /// The signal word the hazards require, when the declared one is
    /// too weak.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_signal_word: Option<SignalWord>,
    /// The pictogram set the hazards imply, after precedence filtering,
    /// in canonical GHS01..GHS09 order.
    pub suggested_pictograms: Vec<Pictogram>,
    /// Hazard statements with known codes rewritten to official text;
    /// unknown codes pass through verbatim.
    pub validated_hazard_statements: Vec<HazardStatement>,
    /// Precautionary statements with known codes rewritten to official
    /// text; unknown codes pass through verbatim.
    pub validated_precautionary_statements: Vec<PrecautionaryStatement>,
    /// EU supplemental hazards mandated by the product identity.
    pub supplemental_hazards: Vec<SupplementalHazard>,
    /// SDS currency assessment, when the label dates itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sds_age: Option<SdsAgeReport>,
}

impl ValidationResult {
    /// Count of findings at or above the given severity.
    pub fn count_at_least(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity >= severity).count()
    }

    /// Findings that block compliance (error or critical).
    pub fn blocking_issues(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity.blocks_compliance())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_builder() {
        let issue = ValidationIssue::new(
            IssueKind::UnknownHazardCode,
            Severity::Error,
            "Unknown hazard code H999",
        )
        .with_suggestion("Remove or replace H999")
        .for_h_code(HCode::new("H999"))
        .on_field("hazard_statements");
        assert_eq!(issue.h_code.as_ref().map(|c| c.as_str()), Some("H999"));
        assert!(issue.suggestion.is_some());
        assert!(issue.p_code.is_none());
        assert_eq!(issue.field.as_deref(), Some("hazard_statements"));
    }

    #[test]
    fn test_issue_serde_omits_empty_attribution() {
        let issue = ValidationIssue::new(IssueKind::ExtraPictogram, Severity::Info, "msg");
        let json = serde_json::to_value(&issue).unwrap();
        assert!(json.get("h_code").is_none());
        assert!(json.get("suggestion").is_none());
        assert!(json.get("field").is_none());
        assert_eq!(json["kind"], "extra_pictogram");
    }

    #[test]
    fn test_supplemental_display() {
        let s = SupplementalHazard {
            code: "EUH031".to_string(),
            statement: "Contact with acids liberates toxic gas.".to_string(),
        };
        assert_eq!(s.to_string(), "EUH031: Contact with acids liberates toxic gas.");
    }
}
