//! # SDS Currency Check
//!
//! Assesses how old a safety data sheet is from its free-text revision
//! date. Supplier date formats are wildly inconsistent, so parsing tries
//! a fixed list of common formats and falls back to scanning for a bare
//! year. Age is advisory: an outdated SDS never blocks compliance on its
//! own.

use chrono::{Datelike, NaiveDate};

use crate::report::SdsAgeReport;

/// Review threshold in years. Several jurisdictions mandate SDS review
/// on a 3-5 year cycle; this uses the permissive end.
const OUTDATED_AFTER_YEARS: f64 = 5.0;

/// Date formats tried in order, matching what supplier SDSs actually use.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%d %B %Y",
    "%b %d, %Y",
    "%d-%b-%Y",
];

/// Assess SDS age as of the given date. Returns `None` when no date can
/// be recovered from the text.
///
/// Taking `today` explicitly keeps the assessment a pure function; the
/// engine passes the current date at its boundary.
pub fn assess_sds_age(raw_date: &str, today: NaiveDate) -> Option<SdsAgeReport> {
    let date = parse_sds_date(raw_date)?;
    let days = (today - date).num_days();
    let years_old = ((days as f64 / 365.25) * 10.0).round() / 10.0;
    let is_outdated = years_old > OUTDATED_AFTER_YEARS;
    let warning = is_outdated.then(|| {
        format!("SDS is {years_old} years old. Obtain a current revision before relying on this label.")
    });
    Some(clamp_report(SdsAgeReport {
        years_old,
        is_outdated,
        warning,
    }))
}

/// Recover a date from free text: exact formats first, then a scan for a
/// four-digit year anchored to mid-year (the coarsest defensible guess).
fn parse_sds_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(raw, fmt) {
            return Some(d);
        }
    }
    scan_for_year(raw).and_then(|y| NaiveDate::from_ymd_opt(y, 6, 15))
}

/// Find the first plausible four-digit year (1990..=2099) in the text.
fn scan_for_year(raw: &str) -> Option<i32> {
    let bytes = raw.as_bytes();
    for start in 0..bytes.len().saturating_sub(3) {
        let window = &bytes[start..start + 4];
        if !window.iter().all(u8::is_ascii_digit) {
            continue;
        }
        // Reject windows inside longer digit runs (e.g., a CAS number).
        let before_digit = start > 0 && bytes[start - 1].is_ascii_digit();
        let after_digit = bytes.get(start + 4).is_some_and(u8::is_ascii_digit);
        if before_digit || after_digit {
            continue;
        }
        let year: i32 = std::str::from_utf8(window).ok()?.parse().ok()?;
        if (1990..=2099).contains(&year) {
            return Some(year);
        }
    }
    None
}

/// Future-dated SDSs report an age of zero rather than a negative age.
fn clamp_report(mut report: SdsAgeReport) -> SdsAgeReport {
    if report.years_old < 0.0 {
        report.years_old = 0.0;
        report.is_outdated = false;
        report.warning = None;
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()
    }

    #[test]
    fn test_iso_date_recent() {
        let report = assess_sds_age("2024-06-15", today()).unwrap();
        assert_eq!(report.years_old, 2.0);
        assert!(!report.is_outdated);
        assert!(report.warning.is_none());
    }

    #[test]
    fn test_us_date_outdated() {
        let report = assess_sds_age("06/15/2018", today()).unwrap();
        assert_eq!(report.years_old, 8.0);
        assert!(report.is_outdated);
        assert!(report.warning.as_deref().unwrap().contains("8 years old"));
    }

    #[test]
    fn test_written_month_formats() {
        assert!(assess_sds_age("March 3, 2022", today()).is_some());
        assert!(assess_sds_age("3 March 2022", today()).is_some());
        assert!(assess_sds_age("15-Jun-2021", today()).is_some());
    }

    #[test]
    fn test_year_scan_fallback() {
        let report = assess_sds_age("Rev. 4, issued 2019", today()).unwrap();
        assert_eq!(report.years_old, 7.0);
        assert!(report.is_outdated);
    }

    #[test]
    fn test_year_scan_skips_longer_digit_runs() {
        // 67641 contains the window 6764 but is part of a CAS number.
        assert!(parse_sds_date("CAS 67641").is_none());
    }

    #[test]
    fn test_unparseable_returns_none() {
        assert!(assess_sds_age("", today()).is_none());
        assert!(assess_sds_age("see section 16", today()).is_none());
    }

    #[test]
    fn test_threshold_is_strict() {
        // Exactly 5.0 years is not outdated; just past it is.
        let report = assess_sds_age("2021-06-15", today()).unwrap();
        assert_eq!(report.years_old, 5.0);
        assert!(!report.is_outdated);

        let report = assess_sds_age("2021-05-15", today()).unwrap();
        assert!(report.is_outdated);
    }

    #[test]
    fn test_future_date_clamps_to_zero() {
        let report = assess_sds_age("2027-01-01", today()).unwrap();
        assert_eq!(report.years_old, 0.0);
        assert!(!report.is_outdated);
    }
}
