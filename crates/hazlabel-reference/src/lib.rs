//! # hazlabel-reference — The GHS Reference Table
//!
//! Static, read-only master data derived from the UN GHS Rev 11 annexes:
//! the hazard (H) and precautionary (P) statement registries, the
//! pictogram assignment per hazard code, default signal words,
//! regulation-required P-code pairings, and the EU supplemental (EUH)
//! registry.
//!
//! ## Concurrency Model
//!
//! The table is constructed once on first use and shared by `&'static`
//! reference ([`ReferenceTable::global`]). No writer exists after load,
//! so no lock is needed; every lookup is a fixed-size map read.
//!
//! ## Lookup Semantics
//!
//! Lookups never fail loudly. A code absent from the registries returns
//! `None`, and the validation engine reports it as an unknown/obsolete
//! code issue — absence is data to characterize, not an error to raise.

pub mod euh;
pub mod hcodes;
pub mod pcodes;
pub mod table;

pub use euh::{EuhEntry, ProductEuhRule};
pub use hcodes::{HCodeEntry, HazardGroup};
pub use pcodes::PCodeEntry;
pub use table::ReferenceTable;
