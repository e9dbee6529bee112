//! # Validation Severity Levels
//!
//! The only error taxonomy the engine emits. Business-level problems in
//! label data become issues at one of these levels; they are never
//! surfaced as `Err` values.

use serde::{Deserialize, Serialize};

/// Severity of a validation issue.
///
/// Ordering is meaningful: `Info < Warning < Error < Critical`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Advisory only; never blocks compliant status.
    Info,
    /// Worth surfacing, but non-blocking.
    Warning,
    /// Blocks compliant status.
    Error,
    /// Safety-relevant; always blocks compliant status.
    Critical,
}

impl Severity {
    /// All severities in ascending order.
    pub fn all() -> &'static [Severity] {
        &[Self::Info, Self::Warning, Self::Error, Self::Critical]
    }

    /// Whether an issue at this severity blocks "compliant" status.
    pub fn blocks_compliance(&self) -> bool {
        matches!(self, Self::Error | Self::Critical)
    }

    /// The snake_case string identifier for this severity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
