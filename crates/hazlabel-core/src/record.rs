//! # Chemical Record Lifecycle
//!
//! Models the lifecycle of a chemical record from SDS ingestion through
//! extraction completion, and the review gate the validation engine
//! controls.
//!
//! ## States
//!
//! ```text
//! Processing ──▶ Completed
//!      │
//!      └──▶ Failed (terminal)
//! ```
//!
//! A `Completed` record additionally carries `needs_review`, sourced from
//! its validation result. Only `Completed && !needs_review` records are
//! eligible for label printing by default; callers may override with an
//! explicit acknowledgement.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::label::GhsLabel;

// ─── Identifier ──────────────────────────────────────────────────────

/// Unique identifier for a chemical record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChemicalId(pub Uuid);

impl ChemicalId {
    /// Generate a new random chemical identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ChemicalId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ChemicalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "chemical:{}", self.0)
    }
}

// ─── Status ──────────────────────────────────────────────────────────

/// The processing status of a chemical record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    /// SDS uploaded, extraction in progress.
    Processing,
    /// Extraction and validation finished.
    Completed,
    /// Extraction failed (terminal).
    Failed,
}

impl RecordStatus {
    /// Whether this status is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Processing => "PROCESSING",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
        };
        f.write_str(s)
    }
}

// ─── Errors ──────────────────────────────────────────────────────────

/// Errors that can occur during record lifecycle transitions.
#[derive(Error, Debug)]
pub enum RecordError {
    /// Attempted transition is not valid from the current status.
    #[error("invalid record transition: {from} -> {to}")]
    InvalidTransition {
        /// Current status.
        from: String,
        /// Attempted target status.
        to: String,
    },
}

// ─── Record ──────────────────────────────────────────────────────────

/// A chemical record with its lifecycle status and review gate.
///
/// The record itself is CRUD glue owned by outer layers; what lives here
/// is the part the engine controls — the status machine and the
/// `needs_review` gate that decides print eligibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChemicalRecord {
    /// Record identifier.
    pub id: ChemicalId,
    /// Product name shown in listings (mirrors the label's identifier
    /// once extraction completes).
    pub product_name: String,
    /// Current processing status.
    pub status: RecordStatus,
    /// Whether the validation verdict gated this record for human review.
    /// Meaningful only once `status == Completed`.
    pub needs_review: bool,
    /// The extracted label, present once completed.
    pub ghs_label: Option<GhsLabel>,
    /// When the record was created (SDS upload time).
    pub created_at: DateTime<Utc>,
}

impl ChemicalRecord {
    /// Create a new record in `Processing` state.
    pub fn new(product_name: impl Into<String>) -> Self {
        Self {
            id: ChemicalId::new(),
            product_name: product_name.into(),
            status: RecordStatus::Processing,
            needs_review: false,
            ghs_label: None,
            created_at: Utc::now(),
        }
    }

    /// Complete extraction (PROCESSING → COMPLETED), attaching the label
    /// and the review flag sourced from its validation result.
    pub fn complete(&mut self, label: GhsLabel, needs_review: bool) -> Result<(), RecordError> {
        self.require_status(RecordStatus::Processing, "COMPLETED")?;
        self.product_name = label.product_identifier.clone();
        self.ghs_label = Some(label);
        self.needs_review = needs_review;
        self.status = RecordStatus::Completed;
        Ok(())
    }

    /// Mark extraction as failed (PROCESSING → FAILED).
    pub fn fail(&mut self) -> Result<(), RecordError> {
        self.require_status(RecordStatus::Processing, "FAILED")?;
        self.status = RecordStatus::Failed;
        Ok(())
    }

    /// Whether this record is eligible for label printing.
    ///
    /// Default policy: completed and not flagged for review. With
    /// `acknowledge_review`, a completed-but-flagged record is admitted
    /// (the caller has explicitly acknowledged the outstanding review).
    /// Failed and in-flight records are never eligible.
    pub fn is_print_eligible(&self, acknowledge_review: bool) -> bool {
        self.status == RecordStatus::Completed && (!self.needs_review || acknowledge_review)
    }

    fn require_status(&self, expected: RecordStatus, target: &str) -> Result<(), RecordError> {
        if self.status != expected {
            return Err(RecordError::InvalidTransition {
                from: self.status.to_string(),
                to: target.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::SignalWord;

    fn label(name: &str) -> GhsLabel {
        GhsLabel {
            product_identifier: name.to_string(),
            signal_word: SignalWord::Warning,
            hazard_statements: vec![],
            precautionary_statements: vec![],
            pictograms: vec![],
            supplier_info: "Supplier".to_string(),
            sds_date: None,
        }
    }

    #[test]
    fn test_complete_carries_review_flag() {
        let mut record = ChemicalRecord::new("upload.pdf");
        record.complete(label("Acetone"), true).unwrap();
        assert_eq!(record.status, RecordStatus::Completed);
        assert!(record.needs_review);
        assert_eq!(record.product_name, "Acetone");
    }

    #[test]
    fn test_eligibility_gate() {
        let mut clean = ChemicalRecord::new("a.pdf");
        clean.complete(label("A"), false).unwrap();
        assert!(clean.is_print_eligible(false));

        let mut flagged = ChemicalRecord::new("b.pdf");
        flagged.complete(label("B"), true).unwrap();
        assert!(!flagged.is_print_eligible(false));
        // Explicit acknowledgement admits a flagged-but-completed record.
        assert!(flagged.is_print_eligible(true));

        let mut failed = ChemicalRecord::new("c.pdf");
        failed.fail().unwrap();
        assert!(!failed.is_print_eligible(false));
        assert!(!failed.is_print_eligible(true));

        let processing = ChemicalRecord::new("d.pdf");
        assert!(!processing.is_print_eligible(true));
    }

    #[test]
    fn test_invalid_transitions_rejected() {
        let mut record = ChemicalRecord::new("a.pdf");
        record.complete(label("A"), false).unwrap();
        assert!(record.fail().is_err());
        assert!(record.complete(label("A"), false).is_err());
    }
}
