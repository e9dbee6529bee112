//! # Pictogram Implication and Precedence
//!
//! Derives the pictogram set a label's hazard codes imply, then applies
//! the GHS Annex 1 precedence rules that suppress the exclamation mark
//! when a stronger symbol already covers the hazard.

use std::collections::BTreeSet;

use hazlabel_core::{HazardStatement, Pictogram};
use hazlabel_reference::ReferenceTable;

/// Hazard codes whose presence keeps GHS07 on the label even when GHS08
/// would otherwise suppress it (acute oral/dermal/inhalation toxicity
/// category 4 and narcotic effects).
const GHS07_KEEP_WITH_GHS08: &[&str] = &["H302", "H312", "H332", "H336"];

/// The raw union of pictograms implied by the hazard codes, before any
/// precedence filtering. Order-invariant: a set, keyed by canonical
/// pictogram order.
pub fn implied_pictograms(
    hazards: &[HazardStatement],
    table: &ReferenceTable,
) -> BTreeSet<Pictogram> {
    hazards
        .iter()
        .flat_map(|h| table.pictograms_for(&h.code).iter().copied())
        .collect()
}

/// The pictogram set the label *should* carry: the implied union with
/// Annex 1 precedence applied, in canonical GHS01..GHS09 order.
///
/// Precedence rules, in application order:
/// 1. GHS06 (skull) suppresses GHS07 (exclamation mark).
/// 2. GHS05 (corrosion) suppresses GHS07 for skin/eye irritation.
/// 3. GHS08 (health hazard) suppresses GHS07, unless an acute-toxicity
///    or narcotic code independently demands the exclamation mark.
pub fn suggest_pictograms(
    hazards: &[HazardStatement],
    table: &ReferenceTable,
) -> Vec<Pictogram> {
    let mut set = implied_pictograms(hazards, table);

    if set.contains(&Pictogram::Ghs06) {
        set.remove(&Pictogram::Ghs07);
    }
    if set.contains(&Pictogram::Ghs05) {
        set.remove(&Pictogram::Ghs07);
    }
    if set.contains(&Pictogram::Ghs08) {
        let ghs07_needed = hazards
            .iter()
            .any(|h| GHS07_KEEP_WITH_GHS08.contains(&h.code.as_str()));
        if !ghs07_needed {
            set.remove(&Pictogram::Ghs07);
        }
    }

    set.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> &'static ReferenceTable {
        ReferenceTable::global()
    }

    fn hazards(codes: &[&str]) -> Vec<HazardStatement> {
        codes.iter().map(|c| HazardStatement::new(*c, "")).collect()
    }

    #[test]
    fn test_union_is_order_invariant() {
        let forward = implied_pictograms(&hazards(&["H225", "H319", "H301"]), table());
        let reverse = implied_pictograms(&hazards(&["H301", "H319", "H225"]), table());
        assert_eq!(forward, reverse);
    }

    #[test]
    fn test_skull_suppresses_exclamation() {
        // H301 implies GHS06, H319 implies GHS07.
        let suggested = suggest_pictograms(&hazards(&["H301", "H319"]), table());
        assert!(suggested.contains(&Pictogram::Ghs06));
        assert!(!suggested.contains(&Pictogram::Ghs07));
    }

    #[test]
    fn test_corrosion_suppresses_exclamation() {
        // H314 implies GHS05, H315 implies GHS07.
        let suggested = suggest_pictograms(&hazards(&["H314", "H315"]), table());
        assert!(suggested.contains(&Pictogram::Ghs05));
        assert!(!suggested.contains(&Pictogram::Ghs07));
    }

    #[test]
    fn test_health_hazard_suppresses_exclamation_by_default() {
        // H350 implies GHS08, H319 implies GHS07, no acute-tox code.
        let suggested = suggest_pictograms(&hazards(&["H350", "H319"]), table());
        assert!(suggested.contains(&Pictogram::Ghs08));
        assert!(!suggested.contains(&Pictogram::Ghs07));
    }

    #[test]
    fn test_acute_toxicity_keeps_exclamation_beside_health_hazard() {
        // H302 (acute oral tox cat 4) demands GHS07 even with GHS08 present.
        let suggested = suggest_pictograms(&hazards(&["H350", "H302"]), table());
        assert!(suggested.contains(&Pictogram::Ghs08));
        assert!(suggested.contains(&Pictogram::Ghs07));
    }

    #[test]
    fn test_unknown_codes_imply_nothing() {
        assert!(implied_pictograms(&hazards(&["H999", ""]), table()).is_empty());
    }

    #[test]
    fn test_canonical_output_order() {
        let suggested = suggest_pictograms(&hazards(&["H411", "H225", "H314"]), table());
        assert_eq!(
            suggested,
            vec![Pictogram::Ghs02, Pictogram::Ghs05, Pictogram::Ghs09]
        );
    }
}
