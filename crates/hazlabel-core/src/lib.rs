//! # hazlabel-core — Foundational Types for the HazLabel Engine
//!
//! This crate is the bedrock of the HazLabel workspace. It defines the
//! type-system primitives shared by the reference table, the validation
//! engine, and the layout packer. Every other crate in the workspace
//! depends on `hazlabel-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for GHS codes.** `HCode` and `PCode` are newtypes,
//!    not bare strings. Malformed codes remain representable — the engine's
//!    job is to characterize imperfect data, so construction never fails —
//!    but well-formedness is a first-class predicate.
//!
//! 2. **Closed enums for the fixed GHS vocabularies.** `SignalWord`,
//!    `Pictogram`, `PrecautionCategory`, and `Severity` are small, fixed
//!    value sets. Exhaustive `match` everywhere; adding a variant forces
//!    every consumer to handle it at compile time.
//!
//! 3. **Derived, never stored.** A precautionary statement's category is a
//!    computed accessor over its code. There is no cached category field
//!    that can go stale when a code string is edited upstream.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `hazlabel-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement `Serialize`/`Deserialize`.

pub mod category;
pub mod codes;
pub mod error;
pub mod label;
pub mod pictogram;
pub mod record;
pub mod severity;
pub mod signal;

// Re-export primary types for ergonomic imports.
pub use category::PrecautionCategory;
pub use codes::{HCode, PCode};
pub use error::CoreError;
pub use label::{GhsLabel, HazardStatement, PrecautionaryStatement};
pub use pictogram::Pictogram;
pub use record::{ChemicalId, ChemicalRecord, RecordError, RecordStatus};
pub use severity::Severity;
pub use signal::SignalWord;
