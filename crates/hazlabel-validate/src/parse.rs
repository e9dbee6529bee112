//! # Statement Parsing
//!
//! Splits raw extracted statement strings into code and body, and
//! repairs the one systematic extraction defect worth special-casing:
//! truncated P501 disposal text.
//!
//! ## Design
//!
//! Parsing never fails. A string with no recognizable code yields a
//! statement with an empty code and the full text as body; the engine
//! reports it as an unknown code downstream. P501 is singled out because
//! its official text is long enough that PDF extractors routinely cut it
//! at a line break, leaving an ellipsis or a dangling connective. The
//! repair substitutes the canonical text wholesale, which is safe only
//! because P501 admits no substantive variation.

use hazlabel_core::{HazardStatement, PrecautionaryStatement};
use hazlabel_reference::ReferenceTable;

/// Split a raw statement into `(code, body)`.
///
/// A `:` separator wins when present; otherwise the first whitespace
/// token is taken as the code. Strings that look like a bare body (no
/// code-shaped leading token) come back with an empty code.
fn split_statement(raw: &str) -> (String, String) {
    let raw = raw.trim();
    if let Some((head, tail)) = raw.split_once(':') {
        let head = head.trim();
        if looks_like_code(head) {
            return (head.to_string(), tail.trim().to_string());
        }
        return (String::new(), raw.to_string());
    }
    match raw.split_once(char::is_whitespace) {
        Some((head, tail)) if looks_like_code(head) => {
            (head.to_string(), tail.trim().to_string())
        }
        None if looks_like_code(raw) => (raw.to_string(), String::new()),
        _ => (String::new(), raw.to_string()),
    }
}

/// Loose shape test for a leading code token. Deliberately broader than
/// well-formedness: `H22` or `P9999` should still be *parsed* as codes
/// so the engine can flag them, rather than swallowed into the body.
fn looks_like_code(token: &str) -> bool {
    let mut chars = token.chars();
    matches!(chars.next(), Some('H' | 'h' | 'P' | 'p' | 'E' | 'e'))
        && token.len() >= 2
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+')
        && token.chars().any(|c| c.is_ascii_digit())
}

/// Parse a raw hazard statement string.
pub fn parse_hazard_statement(raw: &str) -> HazardStatement {
    let (code, body) = split_statement(raw);
    HazardStatement::new(code.as_str(), body)
}

/// Parse a raw precautionary statement string, repairing truncated P501
/// disposal text against the reference table.
pub fn parse_precautionary_statement(raw: &str, table: &ReferenceTable) -> PrecautionaryStatement {
    let (code, body) = split_statement(raw);
    let stmt = PrecautionaryStatement::new(code.as_str(), body);
    if stmt.code.as_str() == "P501" && is_truncated(&stmt.body) {
        return PrecautionaryStatement::new(
            stmt.code.as_str(),
            table.p501_canonical_text(),
        );
    }
    stmt
}

/// Heuristics for text cut mid-sentence by a PDF extractor.
///
/// Triggers on literal ellipses (ASCII and Unicode, plus the common
/// UTF-8-as-Latin-1 mojibake form) and on bodies ending in a dangling
/// connective once any trailing period is stripped.
fn is_truncated(body: &str) -> bool {
    if body.contains("...") || body.contains('…') || body.contains("â€¦") {
        return true;
    }
    let trimmed = body.trim_end().trim_end_matches('.').trim_end();
    let lower = trimmed.to_lowercase();
    lower.ends_with(" to")
        || lower.ends_with(" with")
        || lower.ends_with(" in accordance with")
        || lower.ends_with(" and")
        || lower.ends_with(" or")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> &'static ReferenceTable {
        ReferenceTable::global()
    }

    #[test]
    fn test_colon_separated() {
        let s = parse_hazard_statement("H225: Highly flammable liquid and vapor");
        assert_eq!(s.code.as_str(), "H225");
        assert_eq!(s.body, "Highly flammable liquid and vapor");
    }

    #[test]
    fn test_space_separated() {
        let s = parse_hazard_statement("H319 Causes serious eye irritation");
        assert_eq!(s.code.as_str(), "H319");
        assert_eq!(s.body, "Causes serious eye irritation");
    }

    #[test]
    fn test_bare_code() {
        let s = parse_hazard_statement("  H225  ");
        assert_eq!(s.code.as_str(), "H225");
        assert!(s.body.is_empty());
    }

    #[test]
    fn test_empty_input_is_not_fatal() {
        let s = parse_hazard_statement("");
        assert!(s.code.as_str().is_empty());
        assert!(s.body.is_empty());
        let s = parse_precautionary_statement("   ", table());
        assert!(s.code.as_str().is_empty());
        assert!(s.body.is_empty());
    }

    #[test]
    fn test_no_code_yields_empty_code() {
        let s = parse_hazard_statement("Causes serious eye irritation");
        assert!(s.code.as_str().is_empty());
        assert_eq!(s.body, "Causes serious eye irritation");
    }

    #[test]
    fn test_combined_pcode_with_sloppy_spacing() {
        let s = parse_precautionary_statement(
            "P305 + P351 + P338: IF IN EYES: Rinse cautiously",
            table(),
        );
        // The first colon splits; normalization collapses the spaces.
        assert_eq!(s.code.as_str(), "P305+P351+P338");
        assert_eq!(s.body, "IF IN EYES: Rinse cautiously");
    }

    #[test]
    fn test_p501_ellipsis_repair() {
        for raw in [
            "P501: Dispose of contents/container...",
            "P501: Dispose of contents/container…",
            "P501: Dispose of contents/containerâ€¦",
        ] {
            let s = parse_precautionary_statement(raw, table());
            assert_eq!(s.body, table().p501_canonical_text(), "{raw}");
        }
    }

    #[test]
    fn test_p501_dangling_connective_repair() {
        for raw in [
            "P501: Dispose of contents/container in accordance with",
            "P501: Dispose of contents/container in accordance with.",
            "P501: Dispose of contents to",
        ] {
            let s = parse_precautionary_statement(raw, table());
            assert_eq!(s.body, table().p501_canonical_text(), "{raw}");
        }
    }

    #[test]
    fn test_p501_complete_text_untouched() {
        let raw = format!("P501: {}", table().p501_canonical_text());
        let s = parse_precautionary_statement(&raw, table());
        assert_eq!(s.body, table().p501_canonical_text());
    }

    #[test]
    fn test_non_p501_truncation_untouched() {
        let s = parse_precautionary_statement("P210: Keep away from heat...", table());
        assert_eq!(s.body, "Keep away from heat...");
    }
}
