//! # EU Supplemental Hazards
//!
//! Injects EUH statements mandated by the chemical identity itself
//! rather than by classification. Matching is a case-insensitive
//! substring test of the product identifier against the reference
//! table's keyword rules.

use hazlabel_reference::ReferenceTable;

use crate::report::SupplementalHazard;

/// The EUH statements the product identity mandates, deduplicated, in
/// rule order.
pub fn supplemental_hazards_for(
    product_identifier: &str,
    table: &ReferenceTable,
) -> Vec<SupplementalHazard> {
    let name = product_identifier.to_lowercase();
    let mut out: Vec<SupplementalHazard> = Vec::new();
    for rule in table.product_euh_rules() {
        if !name.contains(rule.keyword) {
            continue;
        }
        for code in rule.euh_codes {
            if out.iter().any(|s| s.code == *code) {
                continue;
            }
            if let Some(entry) = table.supplemental(code) {
                out.push(SupplementalHazard {
                    code: entry.code.to_string(),
                    statement: entry.statement.to_string(),
                });
            }
        }
    }
    out
}
