//! # Hazard Statement Registry
//!
//! Every H-code in UN GHS Rev 11 Annex 3, with its official statement
//! text, the default (most severe applicable) signal word, the fixed
//! pictogram assignment from Annex 1, and the P-codes regulation requires
//! to co-occur on a label carrying this hazard.
//!
//! Pictogram identity is invariant: a given H-code always maps to the
//! same fixed pictogram set. Codes absent from this registry are unknown
//! or deleted in the current revision and are flagged by the validation
//! engine.

use hazlabel_core::{Pictogram, SignalWord};

/// One entry in the hazard statement registry.
#[derive(Debug, Clone, Copy)]
pub struct HCodeEntry {
    /// The canonical code.
    pub code: &'static str,
    /// Official statement text.
    pub statement: &'static str,
    /// Default signal word — the most severe the hazard class can carry.
    pub signal_word: SignalWord,
    /// Fixed pictogram assignment (may be empty; e.g., H229, H303).
    pub pictograms: &'static [Pictogram],
    /// P-codes regulation requires to co-occur with this hazard.
    pub required_p_codes: &'static [&'static str],
}

/// Broad hazard group, derived from the code's leading digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HazardGroup {
    /// H2xx — physical hazards.
    Physical,
    /// H3xx — health hazards.
    Health,
    /// H4xx — environmental hazards.
    Environmental,
}

impl HCodeEntry {
    /// The broad hazard group this code belongs to.
    pub fn group(&self) -> HazardGroup {
        match self.code.as_bytes().get(1) {
            Some(b'2') => HazardGroup::Physical,
            Some(b'3') => HazardGroup::Health,
            _ => HazardGroup::Environmental,
        }
    }
}

use Pictogram::*;
use SignalWord::{Danger, None as NoWord, Warning};

/// The full hazard registry, ordered by code.
pub const H_CODES: &[HCodeEntry] = &[
    // ── Physical hazards ─────────────────────────────────────────────
    HCodeEntry { code: "H200", statement: "Unstable explosive", signal_word: Danger, pictograms: &[Ghs01], required_p_codes: &[] },
    HCodeEntry { code: "H201", statement: "Explosive; mass explosion hazard", signal_word: Danger, pictograms: &[Ghs01], required_p_codes: &[] },
    HCodeEntry { code: "H202", statement: "Explosive; severe projection hazard", signal_word: Danger, pictograms: &[Ghs01], required_p_codes: &[] },
    HCodeEntry { code: "H203", statement: "Explosive; fire, blast or projection hazard", signal_word: Danger, pictograms: &[Ghs01], required_p_codes: &[] },
    HCodeEntry { code: "H204", statement: "Fire or projection hazard", signal_word: Warning, pictograms: &[Ghs01], required_p_codes: &[] },
    HCodeEntry { code: "H205", statement: "May mass explode in fire", signal_word: Danger, pictograms: &[Ghs01], required_p_codes: &[] },
    HCodeEntry { code: "H220", statement: "Extremely flammable gas", signal_word: Danger, pictograms: &[Ghs02], required_p_codes: &["P210"] },
    HCodeEntry { code: "H221", statement: "Flammable gas", signal_word: Warning, pictograms: &[Ghs02], required_p_codes: &["P210"] },
    HCodeEntry { code: "H222", statement: "Extremely flammable aerosol", signal_word: Danger, pictograms: &[Ghs02], required_p_codes: &["P210"] },
    HCodeEntry { code: "H223", statement: "Flammable aerosol", signal_word: Warning, pictograms: &[Ghs02], required_p_codes: &["P210"] },
    HCodeEntry { code: "H224", statement: "Extremely flammable liquid and vapor", signal_word: Danger, pictograms: &[Ghs02], required_p_codes: &["P210"] },
    HCodeEntry { code: "H225", statement: "Highly flammable liquid and vapor", signal_word: Danger, pictograms: &[Ghs02], required_p_codes: &["P210"] },
    HCodeEntry { code: "H226", statement: "Flammable liquid and vapor", signal_word: Warning, pictograms: &[Ghs02], required_p_codes: &["P210"] },
    HCodeEntry { code: "H227", statement: "Combustible liquid", signal_word: Warning, pictograms: &[Ghs02], required_p_codes: &[] },
    HCodeEntry { code: "H228", statement: "Flammable solid", signal_word: Danger, pictograms: &[Ghs02], required_p_codes: &["P210"] },
    HCodeEntry { code: "H229", statement: "Pressurized container: may burst if heated", signal_word: Warning, pictograms: &[], required_p_codes: &[] },
    HCodeEntry { code: "H230", statement: "May react explosively even in the absence of air", signal_word: Danger, pictograms: &[], required_p_codes: &[] },
    HCodeEntry { code: "H231", statement: "May react explosively even in the absence of air at elevated pressure and/or temperature", signal_word: Danger, pictograms: &[], required_p_codes: &[] },
    HCodeEntry { code: "H240", statement: "Heating may cause an explosion", signal_word: Danger, pictograms: &[Ghs01], required_p_codes: &[] },
    HCodeEntry { code: "H241", statement: "Heating may cause a fire or explosion", signal_word: Danger, pictograms: &[Ghs01, Ghs02], required_p_codes: &[] },
    HCodeEntry { code: "H242", statement: "Heating may cause a fire", signal_word: Danger, pictograms: &[Ghs02], required_p_codes: &[] },
    HCodeEntry { code: "H250", statement: "Catches fire spontaneously if exposed to air", signal_word: Danger, pictograms: &[Ghs02], required_p_codes: &["P222"] },
    HCodeEntry { code: "H251", statement: "Self-heating; may catch fire", signal_word: Danger, pictograms: &[Ghs02], required_p_codes: &[] },
    HCodeEntry { code: "H252", statement: "Self-heating in large quantities; may catch fire", signal_word: Warning, pictograms: &[Ghs02], required_p_codes: &[] },
    HCodeEntry { code: "H260", statement: "In contact with water releases flammable gases which may ignite spontaneously", signal_word: Danger, pictograms: &[Ghs02], required_p_codes: &["P223"] },
    HCodeEntry { code: "H261", statement: "In contact with water releases flammable gas", signal_word: Danger, pictograms: &[Ghs02], required_p_codes: &["P223"] },
    HCodeEntry { code: "H270", statement: "May cause or intensify fire; oxidizer", signal_word: Danger, pictograms: &[Ghs03], required_p_codes: &[] },
    HCodeEntry { code: "H271", statement: "May cause fire or explosion; strong oxidizer", signal_word: Danger, pictograms: &[Ghs03], required_p_codes: &["P210", "P220"] },
    HCodeEntry { code: "H272", statement: "May intensify fire; oxidizer", signal_word: Danger, pictograms: &[Ghs03], required_p_codes: &[] },
    HCodeEntry { code: "H280", statement: "Contains gas under pressure; may explode if heated", signal_word: Warning, pictograms: &[Ghs04], required_p_codes: &[] },
    HCodeEntry { code: "H281", statement: "Contains refrigerated gas; may cause cryogenic burns or injury", signal_word: Warning, pictograms: &[Ghs04], required_p_codes: &[] },
    HCodeEntry { code: "H290", statement: "May be corrosive to metals", signal_word: Warning, pictograms: &[Ghs05], required_p_codes: &[] },
    // ── Health hazards ───────────────────────────────────────────────
    HCodeEntry { code: "H300", statement: "Fatal if swallowed", signal_word: Danger, pictograms: &[Ghs06], required_p_codes: &["P310"] },
    HCodeEntry { code: "H301", statement: "Toxic if swallowed", signal_word: Danger, pictograms: &[Ghs06], required_p_codes: &[] },
    HCodeEntry { code: "H302", statement: "Harmful if swallowed", signal_word: Warning, pictograms: &[Ghs07], required_p_codes: &[] },
    HCodeEntry { code: "H303", statement: "May be harmful if swallowed", signal_word: Warning, pictograms: &[], required_p_codes: &[] },
    HCodeEntry { code: "H304", statement: "May be fatal if swallowed and enters airways", signal_word: Danger, pictograms: &[Ghs08], required_p_codes: &["P331"] },
    HCodeEntry { code: "H305", statement: "May be harmful if swallowed and enters airways", signal_word: Warning, pictograms: &[], required_p_codes: &[] },
    HCodeEntry { code: "H310", statement: "Fatal in contact with skin", signal_word: Danger, pictograms: &[Ghs06], required_p_codes: &["P310"] },
    HCodeEntry { code: "H311", statement: "Toxic in contact with skin", signal_word: Danger, pictograms: &[Ghs06], required_p_codes: &[] },
    HCodeEntry { code: "H312", statement: "Harmful in contact with skin", signal_word: Warning, pictograms: &[Ghs07], required_p_codes: &[] },
    HCodeEntry { code: "H313", statement: "May be harmful in contact with skin", signal_word: Warning, pictograms: &[], required_p_codes: &[] },
    HCodeEntry { code: "H314", statement: "Causes severe skin burns and eye damage", signal_word: Danger, pictograms: &[Ghs05], required_p_codes: &["P280"] },
    HCodeEntry { code: "H315", statement: "Causes skin irritation", signal_word: Warning, pictograms: &[Ghs07], required_p_codes: &[] },
    HCodeEntry { code: "H316", statement: "Causes mild skin irritation", signal_word: Warning, pictograms: &[], required_p_codes: &[] },
    HCodeEntry { code: "H317", statement: "May cause an allergic skin reaction", signal_word: Warning, pictograms: &[Ghs07], required_p_codes: &[] },
    HCodeEntry { code: "H318", statement: "Causes serious eye damage", signal_word: Danger, pictograms: &[Ghs05], required_p_codes: &["P280"] },
    HCodeEntry { code: "H319", statement: "Causes serious eye irritation", signal_word: Warning, pictograms: &[Ghs07], required_p_codes: &[] },
    HCodeEntry { code: "H320", statement: "Causes eye irritation", signal_word: Warning, pictograms: &[], required_p_codes: &[] },
    HCodeEntry { code: "H330", statement: "Fatal if inhaled", signal_word: Danger, pictograms: &[Ghs06], required_p_codes: &["P310"] },
    HCodeEntry { code: "H331", statement: "Toxic if inhaled", signal_word: Danger, pictograms: &[Ghs06], required_p_codes: &[] },
    HCodeEntry { code: "H332", statement: "Harmful if inhaled", signal_word: Warning, pictograms: &[Ghs07], required_p_codes: &[] },
    HCodeEntry { code: "H333", statement: "May be harmful if inhaled", signal_word: Warning, pictograms: &[], required_p_codes: &[] },
    HCodeEntry { code: "H334", statement: "May cause allergy or asthma symptoms or breathing difficulties if inhaled", signal_word: Danger, pictograms: &[Ghs08], required_p_codes: &[] },
    HCodeEntry { code: "H335", statement: "May cause respiratory irritation", signal_word: Warning, pictograms: &[Ghs07], required_p_codes: &[] },
    HCodeEntry { code: "H336", statement: "May cause drowsiness or dizziness", signal_word: Warning, pictograms: &[Ghs07], required_p_codes: &[] },
    HCodeEntry { code: "H340", statement: "May cause genetic defects", signal_word: Danger, pictograms: &[Ghs08], required_p_codes: &["P201"] },
    HCodeEntry { code: "H341", statement: "Suspected of causing genetic defects", signal_word: Warning, pictograms: &[Ghs08], required_p_codes: &[] },
    HCodeEntry { code: "H350", statement: "May cause cancer", signal_word: Danger, pictograms: &[Ghs08], required_p_codes: &["P201"] },
    HCodeEntry { code: "H351", statement: "Suspected of causing cancer", signal_word: Warning, pictograms: &[Ghs08], required_p_codes: &[] },
    HCodeEntry { code: "H360", statement: "May damage fertility or the unborn child", signal_word: Danger, pictograms: &[Ghs08], required_p_codes: &["P201"] },
    HCodeEntry { code: "H361", statement: "Suspected of damaging fertility or the unborn child", signal_word: Warning, pictograms: &[Ghs08], required_p_codes: &[] },
    HCodeEntry { code: "H362", statement: "May cause harm to breast-fed children", signal_word: NoWord, pictograms: &[], required_p_codes: &[] },
    HCodeEntry { code: "H370", statement: "Causes damage to organs", signal_word: Danger, pictograms: &[Ghs08], required_p_codes: &[] },
    HCodeEntry { code: "H371", statement: "May cause damage to organs", signal_word: Warning, pictograms: &[Ghs08], required_p_codes: &[] },
    HCodeEntry { code: "H372", statement: "Causes damage to organs through prolonged or repeated exposure", signal_word: Danger, pictograms: &[Ghs08], required_p_codes: &[] },
    HCodeEntry { code: "H373", statement: "May cause damage to organs through prolonged or repeated exposure", signal_word: Warning, pictograms: &[Ghs08], required_p_codes: &[] },
    // ── Environmental hazards ────────────────────────────────────────
    HCodeEntry { code: "H400", statement: "Very toxic to aquatic life", signal_word: Warning, pictograms: &[Ghs09], required_p_codes: &[] },
    HCodeEntry { code: "H401", statement: "Toxic to aquatic life", signal_word: NoWord, pictograms: &[Ghs09], required_p_codes: &[] },
    HCodeEntry { code: "H402", statement: "Harmful to aquatic life", signal_word: NoWord, pictograms: &[Ghs09], required_p_codes: &[] },
    HCodeEntry { code: "H410", statement: "Very toxic to aquatic life with long lasting effects", signal_word: Warning, pictograms: &[Ghs09], required_p_codes: &[] },
    HCodeEntry { code: "H411", statement: "Toxic to aquatic life with long lasting effects", signal_word: NoWord, pictograms: &[Ghs09], required_p_codes: &[] },
    HCodeEntry { code: "H412", statement: "Harmful to aquatic life with long lasting effects", signal_word: NoWord, pictograms: &[Ghs09], required_p_codes: &[] },
    HCodeEntry { code: "H413", statement: "May cause long lasting harmful effects to aquatic life", signal_word: NoWord, pictograms: &[Ghs09], required_p_codes: &[] },
    HCodeEntry { code: "H420", statement: "Harms public health and the environment by destroying ozone in the upper atmosphere", signal_word: Warning, pictograms: &[Ghs09], required_p_codes: &[] },
];
