//! # Error Types
//!
//! Structural errors for the core types. These cover caller-contract
//! violations only — imperfect label *data* is never an error here, it
//! flows through as-is and is characterized later by the validation
//! engine.

use thiserror::Error;

/// Errors raised by core type constructors and parsers.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A signal word string was neither Danger, Warning, nor None.
    #[error("unknown signal word: {0:?} (expected Danger, Warning, or None)")]
    UnknownSignalWord(String),

    /// A pictogram string was not one of the nine canonical GHS codes.
    #[error("unknown pictogram code: {0:?} (expected GHS01..GHS09)")]
    UnknownPictogram(String),
}
