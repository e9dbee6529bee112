//! # The Reference Table
//!
//! Map-backed access layer over the static registries. Built once at
//! first use and shared process-wide by read-only reference; every
//! lookup is a fixed-size map read, so the table is freely shareable
//! across threads with no coordination.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use hazlabel_core::{HCode, PCode, Pictogram, SignalWord};

use crate::euh::{EuhEntry, ProductEuhRule, EUH_CODES, PRODUCT_EUH_RULES};
use crate::hcodes::{HCodeEntry, H_CODES};
use crate::pcodes::{PCodeEntry, CONTRADICTORY_P_PAIRS, P_CODES};

/// Read-only lookup table over the GHS master data.
///
/// Obtain the shared instance with [`ReferenceTable::global`]. The
/// constructor is public for tests that want an isolated instance; the
/// contents are identical either way.
#[derive(Debug)]
pub struct ReferenceTable {
    hazards: BTreeMap<&'static str, &'static HCodeEntry>,
    precautions: BTreeMap<&'static str, &'static PCodeEntry>,
    supplemental: BTreeMap<&'static str, &'static EuhEntry>,
}

static GLOBAL: OnceLock<ReferenceTable> = OnceLock::new();

impl ReferenceTable {
    /// Build the table from the built-in registries.
    pub fn builtin() -> Self {
        Self {
            hazards: H_CODES.iter().map(|e| (e.code, e)).collect(),
            precautions: P_CODES.iter().map(|e| (e.code, e)).collect(),
            supplemental: EUH_CODES.iter().map(|e| (e.code, e)).collect(),
        }
    }

    /// The process-wide shared table, built on first use.
    pub fn global() -> &'static ReferenceTable {
        GLOBAL.get_or_init(ReferenceTable::builtin)
    }

    // ─── Hazard lookups ──────────────────────────────────────────────

    /// Look up a hazard code. `None` means unknown or deleted in the
    /// current GHS revision.
    pub fn hazard(&self, code: &HCode) -> Option<&'static HCodeEntry> {
        self.hazards.get(code.as_str()).copied()
    }

    /// The fixed pictogram assignment for a hazard code. Unknown codes
    /// imply no pictograms.
    pub fn pictograms_for(&self, code: &HCode) -> &'static [Pictogram] {
        self.hazard(code).map_or(&[], |e| e.pictograms)
    }

    /// The default signal word for a hazard code, if known.
    pub fn signal_word_for(&self, code: &HCode) -> Option<SignalWord> {
        self.hazard(code).map(|e| e.signal_word)
    }

    /// The P-codes regulation requires to co-occur with a hazard code.
    pub fn required_p_codes_for(&self, code: &HCode) -> &'static [&'static str] {
        self.hazard(code).map_or(&[], |e| e.required_p_codes)
    }

    // ─── Precaution lookups ──────────────────────────────────────────

    /// Look up a precautionary code (combined codes use their `+` form).
    pub fn precaution(&self, code: &PCode) -> Option<&'static PCodeEntry> {
        self.precautions.get(code.as_str()).copied()
    }

    /// The canonical full P501 disposal text.
    pub fn p501_canonical_text(&self) -> &'static str {
        crate::pcodes::P501_CANONICAL_TEXT
    }

    /// Known contradictory precautionary pairs.
    pub fn contradictory_p_pairs(&self) -> &'static [(&'static str, &'static str)] {
        CONTRADICTORY_P_PAIRS
    }

    // ─── Supplemental lookups ────────────────────────────────────────

    /// Look up an EUH supplemental code.
    pub fn supplemental(&self, code: &str) -> Option<&'static EuhEntry> {
        self.supplemental.get(code).copied()
    }

    /// Product-keyword rules mandating EUH codes.
    pub fn product_euh_rules(&self) -> &'static [ProductEuhRule] {
        PRODUCT_EUH_RULES
    }

    /// Number of registered hazard codes.
    pub fn hazard_count(&self) -> usize {
        self.hazards.len()
    }

    /// Number of registered precautionary codes (including combined).
    pub fn precaution_count(&self) -> usize {
        self.precautions.len()
    }
}
