//! # Label Stock Profiles
//!
//! The catalog of supported label sheet formats: standard Avery stock,
//! square GHS drum labels, and full-page formats. Each profile fixes the
//! sheet grid, so slot capacity is a property of the profile, not of the
//! print job.

use serde::{Deserialize, Serialize};

use crate::LayoutError;

/// The physical page a profile prints on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    /// US Letter, 8.5 × 11 in.
    Letter,
    /// ISO A4, 210 × 297 mm.
    A4,
}

impl Page {
    /// Page dimensions in inches, (width, height).
    pub fn dimensions_in(&self) -> (f64, f64) {
        match self {
            Self::Letter => (8.5, 11.0),
            Self::A4 => (8.27, 11.69),
        }
    }
}

/// One supported label sheet format. Serializes for plan output; the
/// catalog itself is static and never deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LabelSizeProfile {
    /// Stable catalog key (e.g., `avery_5163`).
    pub key: &'static str,
    /// Human-readable name for pickers.
    pub name: &'static str,
    /// The page the sheet prints on.
    pub page: Page,
    /// Label columns per sheet.
    pub columns: usize,
    /// Label rows per sheet.
    pub rows: usize,
    /// Single label width in inches.
    pub label_width_in: f64,
    /// Single label height in inches.
    pub label_height_in: f64,
    /// Left page margin in inches.
    pub margin_left_in: f64,
    /// Top page margin in inches.
    pub margin_top_in: f64,
    /// Horizontal gap between adjacent labels in inches.
    pub horizontal_gutter_in: f64,
    /// Vertical gap between adjacent labels in inches.
    pub vertical_gutter_in: f64,
}

impl LabelSizeProfile {
    /// Labels per sheet for this format.
    pub fn max_per_sheet(&self) -> usize {
        self.columns * self.rows
    }

    /// Top-left corner of a slot in page coordinates (inches from the
    /// page's top-left), for the render side.
    pub fn slot_origin_in(&self, row: usize, col: usize) -> (f64, f64) {
        let x = self.margin_left_in
            + col as f64 * (self.label_width_in + self.horizontal_gutter_in);
        let y = self.margin_top_in
            + row as f64 * (self.label_height_in + self.vertical_gutter_in);
        (x, y)
    }

    /// Look up a profile by catalog key.
    pub fn by_key(key: &str) -> Result<&'static LabelSizeProfile, LayoutError> {
        PROFILES
            .iter()
            .find(|p| p.key == key)
            .ok_or_else(|| LayoutError::UnknownProfile(key.to_string()))
    }

    /// The full catalog, in presentation order.
    pub fn all() -> &'static [LabelSizeProfile] {
        PROFILES
    }
}

impl std::fmt::Display for LabelSizeProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.key)
    }
}

const PROFILES: &[LabelSizeProfile] = &[
    LabelSizeProfile {
        key: "avery_5163",
        name: "Avery 5163 — 4\" × 2\" shipping",
        page: Page::Letter,
        columns: 2,
        rows: 5,
        label_width_in: 4.0,
        label_height_in: 2.0,
        margin_left_in: 0.156,
        margin_top_in: 0.5,
        horizontal_gutter_in: 0.188,
        vertical_gutter_in: 0.0,
    },
    LabelSizeProfile {
        key: "avery_5164",
        name: "Avery 5164 — 4\" × 3⅓\" shipping",
        page: Page::Letter,
        columns: 2,
        rows: 3,
        label_width_in: 4.0,
        label_height_in: 3.33,
        margin_left_in: 0.156,
        margin_top_in: 0.5,
        horizontal_gutter_in: 0.188,
        vertical_gutter_in: 0.0,
    },
    LabelSizeProfile {
        key: "avery_5165",
        name: "Avery 5165 — full sheet",
        page: Page::Letter,
        columns: 1,
        rows: 1,
        label_width_in: 8.5,
        label_height_in: 11.0,
        margin_left_in: 0.0,
        margin_top_in: 0.0,
        horizontal_gutter_in: 0.0,
        vertical_gutter_in: 0.0,
    },
    LabelSizeProfile {
        key: "avery_5160",
        name: "Avery 5160 — 2⅝\" × 1\" address",
        page: Page::Letter,
        columns: 3,
        rows: 10,
        label_width_in: 2.625,
        label_height_in: 1.0,
        margin_left_in: 0.1875,
        margin_top_in: 0.5,
        horizontal_gutter_in: 0.125,
        vertical_gutter_in: 0.0,
    },
    LabelSizeProfile {
        key: "ghs_4x4",
        name: "GHS 4\" × 4\" drum",
        page: Page::Letter,
        columns: 2,
        rows: 2,
        label_width_in: 4.0,
        label_height_in: 4.0,
        margin_left_in: 0.125,
        margin_top_in: 1.375,
        horizontal_gutter_in: 0.25,
        vertical_gutter_in: 0.25,
    },
    LabelSizeProfile {
        key: "ghs_4x2",
        name: "GHS 4\" × 2\" container",
        page: Page::Letter,
        columns: 2,
        rows: 5,
        label_width_in: 4.0,
        label_height_in: 2.0,
        margin_left_in: 0.125,
        margin_top_in: 0.1,
        horizontal_gutter_in: 0.25,
        vertical_gutter_in: 0.2,
    },
    LabelSizeProfile {
        key: "ghs_2x2",
        name: "GHS 2\" × 2\" small container",
        page: Page::Letter,
        columns: 4,
        rows: 5,
        label_width_in: 2.0,
        label_height_in: 2.0,
        margin_left_in: 0.0625,
        margin_top_in: 0.1,
        horizontal_gutter_in: 0.125,
        vertical_gutter_in: 0.2,
    },
    LabelSizeProfile {
        key: "letter_full",
        name: "Full page — US Letter",
        page: Page::Letter,
        columns: 1,
        rows: 1,
        label_width_in: 8.5,
        label_height_in: 11.0,
        margin_left_in: 0.0,
        margin_top_in: 0.0,
        horizontal_gutter_in: 0.0,
        vertical_gutter_in: 0.0,
    },
    LabelSizeProfile {
        key: "a4_full",
        name: "Full page — A4",
        page: Page::A4,
        columns: 1,
        rows: 1,
        label_width_in: 8.27,
        label_height_in: 11.69,
        margin_left_in: 0.0,
        margin_top_in: 0.0,
        horizontal_gutter_in: 0.0,
        vertical_gutter_in: 0.0,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_keys_unique() {
        let mut seen = std::collections::HashSet::new();
        for profile in LabelSizeProfile::all() {
            assert!(seen.insert(profile.key), "duplicate key: {}", profile.key);
        }
    }

    #[test]
    fn test_by_key_lookup() {
        let profile = LabelSizeProfile::by_key("avery_5163").unwrap();
        assert_eq!(profile.max_per_sheet(), 10);
        assert_eq!(profile.page, Page::Letter);
        assert!(matches!(
            LabelSizeProfile::by_key("avery_9999"),
            Err(LayoutError::UnknownProfile(_))
        ));
    }

    #[test]
    fn test_grids_fit_their_pages() {
        for profile in LabelSizeProfile::all() {
            let (page_w, page_h) = profile.page.dimensions_in();
            let grid_w = 2.0 * profile.margin_left_in
                + profile.columns as f64 * profile.label_width_in
                + (profile.columns - 1) as f64 * profile.horizontal_gutter_in;
            let grid_h = 2.0 * profile.margin_top_in
                + profile.rows as f64 * profile.label_height_in
                + (profile.rows - 1) as f64 * profile.vertical_gutter_in;
            assert!(grid_w <= page_w + 0.01, "{} too wide: {grid_w}", profile.key);
            assert!(grid_h <= page_h + 0.01, "{} too tall: {grid_h}", profile.key);
            assert!(profile.max_per_sheet() >= 1);
        }
    }

    #[test]
    fn test_slot_origin_geometry() {
        let profile = LabelSizeProfile::by_key("avery_5163").unwrap();
        assert_eq!(profile.slot_origin_in(0, 0), (0.156, 0.5));
        let (x, y) = profile.slot_origin_in(1, 1);
        assert!((x - 4.344).abs() < 1e-9);
        assert!((y - 2.5).abs() < 1e-9);
    }
}
