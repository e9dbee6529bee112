//! # hazlabel-validate — The GHS Label Validation Engine
//!
//! Takes a candidate [`GhsLabel`](hazlabel_core::GhsLabel), checks it
//! against the static reference table, and produces a
//! [`ValidationResult`]: an ordered issue list, the compliance verdict,
//! and corrected artifacts (official statement texts, the implied
//! pictogram set, required-but-missing P-codes).
//!
//! ## Key Design Principles
//!
//! 1. **Validation never fails.** Any label, however broken, produces a
//!    result. Problems are findings inside the result, not errors at the
//!    call boundary.
//!
//! 2. **Deterministic output.** Checks run in a fixed order; within a
//!    check, findings follow label source order. The wall clock enters
//!    only through the explicit `today` parameter of
//!    [`validate_label_as_of`], so replays reproduce bit-identical
//!    results.
//!
//! 3. **Severity drives the verdict.** `error` and `critical` findings
//!    block compliance and force human review; `info` and `warning`
//!    findings (including the SDS age report) never do.
//!
//! ## Entry Points
//!
//! - [`validate_label`] / [`validate_label_as_of`] — the engine.
//! - [`parse_hazard_statement`] / [`parse_precautionary_statement`] —
//!   raw-string front door, with P501 truncation repair.

pub mod age;
pub mod engine;
pub mod parse;
pub mod pictograms;
pub mod report;
pub mod supplemental;

pub use age::assess_sds_age;
pub use engine::{validate_label, validate_label_as_of};
pub use parse::{parse_hazard_statement, parse_precautionary_statement};
pub use pictograms::{implied_pictograms, suggest_pictograms};
pub use report::{
    IssueKind, SdsAgeReport, SupplementalHazard, ValidationIssue, ValidationResult,
};
pub use supplemental::supplemental_hazards_for;
