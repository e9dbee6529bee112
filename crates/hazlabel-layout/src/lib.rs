//! # hazlabel-layout — Print Layout Planning
//!
//! Turns a set of print-eligible chemical records into a concrete print
//! plan: which label goes in which slot on which sheet, for a chosen
//! label stock format.
//!
//! ## Key Design Principles
//!
//! 1. **Profiles are a closed catalog.** Supported sheet formats are
//!    static data; capacity and slot geometry derive from the profile,
//!    never from the print job.
//!
//! 2. **Packing is deterministic.** First-fit in request order, copies
//!    adjacent, no bin-packing heuristics. The same request always
//!    yields the same plan.
//!
//! 3. **The review gate is enforced here too.** [`print_eligible`]
//!    re-applies the record-level eligibility rule at the print
//!    boundary, so a flagged record cannot reach paper without an
//!    explicit acknowledgement.

use thiserror::Error;

pub mod packer;
pub mod profile;

pub use packer::{plan_sheets, print_eligible, PlacedLabel, PrintPlan, Sheet};
pub use profile::{LabelSizeProfile, Page};

/// Errors from print layout planning.
#[derive(Error, Debug)]
pub enum LayoutError {
    /// The requested label stock key is not in the catalog.
    #[error("unknown label size profile: {0}")]
    UnknownProfile(String),
    /// A print run must produce at least one copy per label.
    #[error("invalid copy count: {0} (must be at least 1)")]
    InvalidCopies(usize),
}
