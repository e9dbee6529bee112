//! # The Validation Engine
//!
//! Runs every check against a candidate label and aggregates the
//! verdict. Pure given its inputs: the same label and reference table
//! always produce the same result, and the wall clock enters only
//! through the explicit `today` parameter of [`validate_label_as_of`].
//!
//! ## Design
//!
//! Checks run in a fixed order and push issues as they go, so the issue
//! list is deterministic and stable across runs. The verdict is derived
//! last: a label is valid when no finding blocks compliance and the
//! signal word holds, and `needs_review` is always the complement.
//! Advisory findings (info, warning) and the SDS age report never flip
//! the verdict.

use std::collections::BTreeSet;

use chrono::{NaiveDate, Utc};
use tracing::debug;

use hazlabel_core::{
    GhsLabel, HCode, HazardStatement, PCode, Pictogram, PrecautionaryStatement, Severity,
    SignalWord,
};
use hazlabel_reference::ReferenceTable;

use crate::age::assess_sds_age;
use crate::pictograms::suggest_pictograms;
use crate::report::{IssueKind, SupplementalHazard, ValidationIssue, ValidationResult};
use crate::supplemental::supplemental_hazards_for;

/// Validate a label against the reference table, assessing SDS age
/// against the current date.
pub fn validate_label(label: &GhsLabel, table: &ReferenceTable) -> ValidationResult {
    validate_label_as_of(label, table, Utc::now().date_naive())
}

/// Validate a label as of an explicit date. Pure; tests and replay
/// tooling pin `today` for reproducible results.
pub fn validate_label_as_of(
    label: &GhsLabel,
    table: &ReferenceTable,
    today: NaiveDate,
) -> ValidationResult {
    let mut issues: Vec<ValidationIssue> = Vec::new();

    // ─── Check 1: hazard codes exist ─────────────────────────────────
    for stmt in &label.hazard_statements {
        if table.hazard(&stmt.code).is_none() {
            issues.push(
                ValidationIssue::new(
                    IssueKind::UnknownHazardCode,
                    Severity::Error,
                    format!("Unknown hazard code: {}", display_code(&stmt.code)),
                )
                .with_suggestion(format!(
                    "Remove {} or replace it with a current GHS hazard code",
                    display_code(&stmt.code)
                ))
                .for_h_code(stmt.code.clone())
                .on_field("hazard_statements"),
            );
        }
    }

    // ─── Check 2: pictogram completeness ─────────────────────────────
    let suggested_pictograms = suggest_pictograms(&label.hazard_statements, table);
    let declared: BTreeSet<Pictogram> = label.pictograms.iter().copied().collect();
    for pict in &suggested_pictograms {
        if !declared.contains(pict) {
            issues.push(
                ValidationIssue::new(
                    IssueKind::MissingPictogram,
                    Severity::Warning,
                    format!(
                        "Pictogram {} ({}) is required by the declared hazards but missing",
                        pict,
                        pict.symbol_name()
                    ),
                )
                .with_suggestion(format!("Add pictogram {} ({})", pict, pict.symbol_name()))
                .on_field("pictograms"),
            );
        }
    }
    for pict in Pictogram::all() {
        if declared.contains(pict) && !suggested_pictograms.contains(pict) {
            issues.push(
                ValidationIssue::new(
                    IssueKind::ExtraPictogram,
                    Severity::Info,
                    format!(
                        "Pictogram {} ({}) is declared but not implied by any hazard code",
                        pict,
                        pict.symbol_name()
                    ),
                )
                .on_field("pictograms"),
            );
        }
    }

    // ─── Check 3: signal word strength ───────────────────────────────
    let required_word = label
        .hazard_statements
        .iter()
        .filter_map(|s| table.signal_word_for(&s.code))
        .max()
        .unwrap_or(SignalWord::None);
    let mut signal_word_valid = true;
    let mut suggested_signal_word = None;
    if label.signal_word < required_word {
        signal_word_valid = false;
        suggested_signal_word = Some(required_word);
        issues.push(
            ValidationIssue::new(
                IssueKind::SignalWordTooWeak,
                Severity::Critical,
                format!(
                    "Signal word \"{}\" is weaker than the hazards require (\"{}\")",
                    label.signal_word, required_word
                ),
            )
            .with_suggestion(format!("Change the signal word to \"{required_word}\""))
            .on_field("signal_word"),
        );
    } else if label.signal_word > required_word {
        issues.push(
            ValidationIssue::new(
                IssueKind::SignalWordOverLabeled,
                Severity::Info,
                format!(
                    "Signal word \"{}\" is stronger than the hazards require (\"{}\"); \
                     over-labeling is permitted but dilutes stronger warnings",
                    label.signal_word, required_word
                ),
            )
            .on_field("signal_word"),
        );
    }

    // ─── Check 4: required precautionary codes ───────────────────────
    // Combined codes satisfy requirements through their components.
    let declared_p: BTreeSet<PCode> = label
        .precautionary_statements
        .iter()
        .flat_map(|s| {
            std::iter::once(s.code.clone()).chain(s.code.components().collect::<Vec<_>>())
        })
        .collect();
    let mut missing_p_codes: Vec<PCode> = Vec::new();
    for stmt in &label.hazard_statements {
        for required in table.required_p_codes_for(&stmt.code) {
            let required = PCode::new(*required);
            if declared_p.contains(&required) || missing_p_codes.contains(&required) {
                continue;
            }
            issues.push(
                ValidationIssue::new(
                    IssueKind::MissingRequiredPCode,
                    Severity::Error,
                    format!(
                        "Hazard {} requires precautionary statement {}, which is missing",
                        stmt.code, required
                    ),
                )
                .with_suggestion(format!("Add {}", statement_for(&required, table)))
                .for_h_code(stmt.code.clone())
                .for_p_code(required.clone())
                .on_field("precautionary_statements"),
            );
            missing_p_codes.push(required);
        }
    }

    // ─── Check 5: duplicates and contradictions ──────────────────────
    let mut seen: BTreeSet<&HCode> = BTreeSet::new();
    let mut reported: BTreeSet<&HCode> = BTreeSet::new();
    for stmt in &label.hazard_statements {
        if !seen.insert(&stmt.code) && reported.insert(&stmt.code) {
            issues.push(
                ValidationIssue::new(
                    IssueKind::DuplicateHazardCode,
                    Severity::Warning,
                    format!("Hazard code {} appears more than once", stmt.code),
                )
                .for_h_code(stmt.code.clone())
                .on_field("hazard_statements"),
            );
        }
    }
    for (a, b) in table.contradictory_p_pairs() {
        let (a, b) = (PCode::new(*a), PCode::new(*b));
        if declared_p.contains(&a) && declared_p.contains(&b) {
            issues.push(
                ValidationIssue::new(
                    IssueKind::ContradictoryPrecautions,
                    Severity::Warning,
                    format!(
                        "Precautionary statements {a} and {b} contradict each other; \
                         verify which applies to this product"
                    ),
                )
                .for_p_code(a)
                .on_field("precautionary_statements"),
            );
        }
    }

    // ─── Statement verification ──────────────────────────────────────
    let validated_hazard_statements =
        verify_hazard_statements(&label.hazard_statements, table, &mut issues);
    let validated_precautionary_statements =
        verify_precautionary_statements(&label.precautionary_statements, table, &mut issues);

    // ─── Supplements ─────────────────────────────────────────────────
    let supplemental_hazards: Vec<SupplementalHazard> =
        supplemental_hazards_for(&label.product_identifier, table);
    let sds_age = label
        .sds_date
        .as_deref()
        .and_then(|raw| assess_sds_age(raw, today));

    // ─── Verdict ─────────────────────────────────────────────────────
    let is_valid = signal_word_valid && !issues.iter().any(|i| i.severity.blocks_compliance());
    let needs_review = !is_valid;

    debug!(
        product = %label.product_identifier,
        issues = issues.len(),
        blocking = issues.iter().filter(|i| i.severity.blocks_compliance()).count(),
        is_valid,
        "label validated"
    );

    ValidationResult {
        is_valid,
        needs_review,
        issues,
        missing_p_codes,
        signal_word_valid,
        suggested_signal_word,
        suggested_pictograms,
        validated_hazard_statements,
        validated_precautionary_statements,
        supplemental_hazards,
        sds_age,
    }
}

/// Rewrite known hazard statements to official text, flagging bodies
/// that differ from it.
fn verify_hazard_statements(
    statements: &[HazardStatement],
    table: &ReferenceTable,
    issues: &mut Vec<ValidationIssue>,
) -> Vec<HazardStatement> {
    statements
        .iter()
        .map(|stmt| match table.hazard(&stmt.code) {
            Some(entry) => {
                if !stmt.body.is_empty() && !texts_match(&stmt.body, entry.statement) {
                    issues.push(
                        ValidationIssue::new(
                            IssueKind::StatementTextMismatch,
                            Severity::Info,
                            format!(
                                "Text for {} differs from the official statement; \
                                 using official text",
                                stmt.code
                            ),
                        )
                        .for_h_code(stmt.code.clone())
                        .on_field("hazard_statements"),
                    );
                }
                HazardStatement::new(stmt.code.as_str(), entry.statement)
            }
            None => stmt.clone(),
        })
        .collect()
}

/// Rewrite known precautionary statements to official text, flagging
/// unknown codes and divergent bodies.
fn verify_precautionary_statements(
    statements: &[PrecautionaryStatement],
    table: &ReferenceTable,
    issues: &mut Vec<ValidationIssue>,
) -> Vec<PrecautionaryStatement> {
    statements
        .iter()
        .map(|stmt| match table.precaution(&stmt.code) {
            Some(entry) => {
                if !stmt.body.is_empty() && !texts_match(&stmt.body, entry.statement) {
                    issues.push(
                        ValidationIssue::new(
                            IssueKind::StatementTextMismatch,
                            Severity::Info,
                            format!(
                                "Text for {} differs from the official statement; \
                                 using official text",
                                stmt.code
                            ),
                        )
                        .for_p_code(stmt.code.clone())
                        .on_field("precautionary_statements"),
                    );
                }
                PrecautionaryStatement::new(stmt.code.as_str(), entry.statement)
            }
            None => {
                issues.push(
                    ValidationIssue::new(
                        IssueKind::UnknownPrecautionCode,
                        Severity::Warning,
                        format!(
                            "Unknown precautionary code: {}",
                            display_code_p(&stmt.code)
                        ),
                    )
                    .for_p_code(stmt.code.clone())
                    .on_field("precautionary_statements"),
                );
                stmt.clone()
            }
        })
        .collect()
}

/// Compare statement bodies ignoring case, surrounding whitespace, and
/// trailing punctuation. Substantive wording differences still count.
fn texts_match(candidate: &str, official: &str) -> bool {
    normalize_text(candidate) == normalize_text(official)
}

fn normalize_text(text: &str) -> String {
    text.trim()
        .trim_end_matches(['.', ';'])
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// A full "P210: Keep away from heat..." string for suggestions, or the
/// bare code when the table has no text.
fn statement_for(code: &PCode, table: &ReferenceTable) -> String {
    match table.precaution(code) {
        Some(entry) => format!("{}: {}", entry.code, entry.statement),
        None => code.to_string(),
    }
}

fn display_code(code: &HCode) -> &str {
    if code.as_str().is_empty() {
        "(empty)"
    } else {
        code.as_str()
    }
}

fn display_code_p(code: &PCode) -> &str {
    if code.as_str().is_empty() {
        "(empty)"
    } else {
        code.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> &'static ReferenceTable {
        ReferenceTable::global()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()
    }

    fn label(
        signal: SignalWord,
        hazards: &[&str],
        precautions: &[&str],
        pictograms: &[Pictogram],
    ) -> GhsLabel {
        GhsLabel {
            product_identifier: "Test Chemical".to_string(),
            signal_word: signal,
            hazard_statements: hazards
                .iter()
                .map(|c| HazardStatement::new(*c, ""))
                .collect(),
            precautionary_statements: precautions
                .iter()
                .map(|c| PrecautionaryStatement::new(*c, ""))
                .collect(),
            pictograms: pictograms.to_vec(),
            supplier_info: "Test Supplier".to_string(),
            sds_date: None,
        }
    }

    #[test]
    fn test_clean_label_is_valid() {
        let l = label(
            SignalWord::Danger,
            &["H225"],
            &["P210"],
            &[Pictogram::Ghs02],
        );
        let result = validate_label_as_of(&l, table(), today());
        assert!(result.is_valid);
        assert!(!result.needs_review);
        assert!(result.issues.is_empty());
        assert!(result.missing_p_codes.is_empty());
    }

    #[test]
    fn test_unknown_hazard_code_is_error() {
        let l = label(SignalWord::None, &["H999"], &[], &[]);
        let result = validate_label_as_of(&l, table(), today());
        assert!(!result.is_valid);
        assert!(result.needs_review);
        let issue = &result.issues[0];
        assert_eq!(issue.kind, IssueKind::UnknownHazardCode);
        assert_eq!(issue.severity, Severity::Error);
        assert_eq!(issue.h_code.as_ref().unwrap().as_str(), "H999");
    }

    #[test]
    fn test_weak_signal_word_is_critical() {
        // H314 requires Danger.
        let l = label(
            SignalWord::Warning,
            &["H314"],
            &["P280"],
            &[Pictogram::Ghs05],
        );
        let result = validate_label_as_of(&l, table(), today());
        assert!(!result.signal_word_valid);
        assert_eq!(result.suggested_signal_word, Some(SignalWord::Danger));
        assert!(result
            .issues
            .iter()
            .any(|i| i.kind == IssueKind::SignalWordTooWeak && i.severity == Severity::Critical));
        assert!(!result.is_valid);
    }

    #[test]
    fn test_over_labeling_is_informational_only() {
        // H319 requires only Warning.
        let l = label(
            SignalWord::Danger,
            &["H319"],
            &[],
            &[Pictogram::Ghs07],
        );
        let result = validate_label_as_of(&l, table(), today());
        assert!(result.signal_word_valid);
        assert!(result.suggested_signal_word.is_none());
        assert!(result
            .issues
            .iter()
            .any(|i| i.kind == IssueKind::SignalWordOverLabeled && i.severity == Severity::Info));
        assert!(result.is_valid);
    }

    #[test]
    fn test_missing_required_p_code() {
        // H260 requires P223.
        let l = label(
            SignalWord::Danger,
            &["H260"],
            &[],
            &[Pictogram::Ghs02],
        );
        let result = validate_label_as_of(&l, table(), today());
        assert_eq!(
            result.missing_p_codes,
            vec![PCode::new("P223")]
        );
        assert!(result
            .issues
            .iter()
            .any(|i| i.kind == IssueKind::MissingRequiredPCode
                && i.severity == Severity::Error
                && i.p_code.as_ref().is_some_and(|c| c.as_str() == "P223")));
        assert!(!result.is_valid);
    }

    #[test]
    fn test_combined_code_satisfies_component_requirement() {
        // H300 requires P310; P301+P310 carries it as a component.
        let l = label(
            SignalWord::Danger,
            &["H300"],
            &["P301+P310"],
            &[Pictogram::Ghs06],
        );
        let result = validate_label_as_of(&l, table(), today());
        assert!(result.missing_p_codes.is_empty());
        assert!(result.is_valid);
    }

    #[test]
    fn test_missing_pictogram_is_warning_not_blocking() {
        let l = label(SignalWord::Danger, &["H225"], &["P210"], &[]);
        let result = validate_label_as_of(&l, table(), today());
        assert!(result
            .issues
            .iter()
            .any(|i| i.kind == IssueKind::MissingPictogram && i.severity == Severity::Warning));
        assert_eq!(result.suggested_pictograms, vec![Pictogram::Ghs02]);
        assert!(result.is_valid);
    }

    #[test]
    fn test_extra_pictogram_is_info() {
        let l = label(
            SignalWord::Danger,
            &["H225"],
            &["P210"],
            &[Pictogram::Ghs02, Pictogram::Ghs09],
        );
        let result = validate_label_as_of(&l, table(), today());
        assert!(result
            .issues
            .iter()
            .any(|i| i.kind == IssueKind::ExtraPictogram && i.severity == Severity::Info));
        assert!(result.is_valid);
    }

    #[test]
    fn test_duplicate_hazard_reported_once() {
        let l = label(
            SignalWord::Danger,
            &["H225", "H225", "H225"],
            &["P210"],
            &[Pictogram::Ghs02],
        );
        let result = validate_label_as_of(&l, table(), today());
        let dups: Vec<_> = result
            .issues
            .iter()
            .filter(|i| i.kind == IssueKind::DuplicateHazardCode)
            .collect();
        assert_eq!(dups.len(), 1);
        assert_eq!(dups[0].severity, Severity::Warning);
    }

    #[test]
    fn test_contradictory_precautions_flagged() {
        let l = label(SignalWord::None, &[], &["P223", "P230"], &[]);
        let result = validate_label_as_of(&l, table(), today());
        assert!(result
            .issues
            .iter()
            .any(|i| i.kind == IssueKind::ContradictoryPrecautions
                && i.severity == Severity::Warning));
        assert!(result.is_valid);
    }

    #[test]
    fn test_official_text_substituted() {
        let l = {
            let mut l = label(
                SignalWord::Danger,
                &[],
                &[],
                &[Pictogram::Ghs02],
            );
            l.hazard_statements =
                vec![HazardStatement::new("H225", "highly flammable liquid and vapor")];
            l.precautionary_statements = vec![PrecautionaryStatement::new("P210", "keep away")];
            l
        };
        let result = validate_label_as_of(&l, table(), today());
        assert_eq!(
            result.validated_hazard_statements[0].body,
            "Highly flammable liquid and vapor"
        );
        // Case-only difference is not a mismatch.
        assert!(!result
            .issues
            .iter()
            .any(|i| i.kind == IssueKind::StatementTextMismatch
                && i.h_code.as_ref().is_some_and(|c| c.as_str() == "H225")));
        // Substantive difference is flagged, at info.
        assert!(result
            .issues
            .iter()
            .any(|i| i.kind == IssueKind::StatementTextMismatch
                && i.severity == Severity::Info
                && i.p_code.as_ref().is_some_and(|c| c.as_str() == "P210")));
    }

    #[test]
    fn test_supplemental_euh_injection() {
        let mut l = label(SignalWord::Warning, &["H319"], &[], &[Pictogram::Ghs07]);
        l.product_identifier = "Sodium Hypochlorite 12%".to_string();
        let result = validate_label_as_of(&l, table(), today());
        assert_eq!(result.supplemental_hazards.len(), 1);
        assert_eq!(result.supplemental_hazards[0].code, "EUH031");
    }

    #[test]
    fn test_sds_age_reported_without_blocking() {
        let mut l = label(
            SignalWord::Danger,
            &["H225"],
            &["P210"],
            &[Pictogram::Ghs02],
        );
        l.sds_date = Some("2017-06-15".to_string());
        let result = validate_label_as_of(&l, table(), today());
        let age = result.sds_age.as_ref().unwrap();
        assert!(age.is_outdated);
        assert!(result.is_valid);
    }

    #[test]
    fn test_validation_is_idempotent() {
        let l = label(
            SignalWord::Warning,
            &["H314", "H999", "H260"],
            &["P230", "P223"],
            &[Pictogram::Ghs01],
        );
        let first = validate_label_as_of(&l, table(), today());
        let second = validate_label_as_of(&l, table(), today());
        assert_eq!(first, second);
    }

    #[test]
    fn test_needs_review_is_complement_of_is_valid() {
        for l in [
            label(SignalWord::Danger, &["H225"], &["P210"], &[Pictogram::Ghs02]),
            label(SignalWord::None, &["H999"], &[], &[]),
            label(SignalWord::Warning, &["H314"], &[], &[]),
        ] {
            let result = validate_label_as_of(&l, table(), today());
            assert_eq!(result.needs_review, !result.is_valid);
        }
    }
}
