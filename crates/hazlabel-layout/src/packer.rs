//! # The Slot Packer
//!
//! Assigns label copies to sheet slots for a print run. Packing is
//! first-fit in request order: copies of the same chemical stay adjacent,
//! sheets fill left-to-right then top-to-bottom, and a new sheet starts
//! only when the current one is full.

use serde::Serialize;
use tracing::debug;

use hazlabel_core::{ChemicalId, ChemicalRecord};

use crate::profile::LabelSizeProfile;
use crate::LayoutError;

/// One label placed at a sheet position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacedLabel {
    /// The chemical this label prints for.
    pub chemical_id: ChemicalId,
    /// Product name, carried for render-side convenience.
    pub product_name: String,
    /// Which copy of this chemical's label this is (1-based).
    pub copy: usize,
    /// Zero-based row on the sheet.
    pub row: usize,
    /// Zero-based column on the sheet.
    pub col: usize,
}

/// One sheet of the print run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sheet {
    /// Zero-based sheet index within the plan.
    pub index: usize,
    /// Placed labels, in slot order.
    pub labels: Vec<PlacedLabel>,
}

impl Sheet {
    /// How many slots this sheet uses.
    pub fn filled(&self) -> usize {
        self.labels.len()
    }
}

/// A complete print run: which label goes in which slot on which sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrintPlan {
    /// The sheet format the plan targets.
    pub profile: LabelSizeProfile,
    /// Sheets in print order. Every sheet except possibly the last is full.
    pub sheets: Vec<Sheet>,
    /// Total labels across all sheets.
    pub total_labels: usize,
}

impl PrintPlan {
    /// Number of sheets the run needs.
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }
}

/// The records from `records` admitted to printing under the review gate.
///
/// Order is preserved. `acknowledge_review` admits completed records
/// still flagged for review; failed and in-flight records never print.
pub fn print_eligible(
    records: &[ChemicalRecord],
    acknowledge_review: bool,
) -> Vec<&ChemicalRecord> {
    records
        .iter()
        .filter(|r| r.is_print_eligible(acknowledge_review))
        .collect()
}

/// Plan a print run: `copies` labels for each record, packed onto sheets
/// of the given format.
///
/// Slot assignment is pure arithmetic over the running label index:
/// `row = slot / columns`, `col = slot % columns`, wrapping to a new
/// sheet every `max_per_sheet` labels.
pub fn plan_sheets(
    records: &[&ChemicalRecord],
    copies: usize,
    profile: &'static LabelSizeProfile,
) -> Result<PrintPlan, LayoutError> {
    if copies < 1 {
        return Err(LayoutError::InvalidCopies(copies));
    }
    let per_sheet = profile.max_per_sheet();
    let placed: Vec<PlacedLabel> = records
        .iter()
        .flat_map(|record| {
            // Row and column are filled in once the flat index is known.
            (1..=copies).map(|copy| PlacedLabel {
                chemical_id: record.id.clone(),
                product_name: record.product_name.clone(),
                copy,
                row: 0,
                col: 0,
            })
        })
        .enumerate()
        .map(|(slot, mut label)| {
            let position = slot % per_sheet;
            label.row = position / profile.columns;
            label.col = position % profile.columns;
            label
        })
        .collect();

    let total_labels = placed.len();
    let sheets: Vec<Sheet> = placed
        .chunks(per_sheet)
        .enumerate()
        .map(|(index, chunk)| Sheet {
            index,
            labels: chunk.to_vec(),
        })
        .collect();

    debug!(
        profile = profile.key,
        records = records.len(),
        copies,
        sheets = sheets.len(),
        total = total_labels,
        "print plan assembled"
    );

    Ok(PrintPlan {
        profile: *profile,
        sheets,
        total_labels,
    })
}
