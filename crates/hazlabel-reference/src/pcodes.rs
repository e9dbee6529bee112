//! # Precautionary Statement Registry
//!
//! Every P-code in UN GHS Rev 11 Annex 3 with its official text,
//! including the combined codes, plus the known contradictory pairs the
//! validation engine flags when they co-occur.

/// One entry in the precautionary statement registry.
#[derive(Debug, Clone, Copy)]
pub struct PCodeEntry {
    /// The canonical code (combined codes keep their `+` form).
    pub code: &'static str,
    /// Official statement text.
    pub statement: &'static str,
}

const fn p(code: &'static str, statement: &'static str) -> PCodeEntry {
    PCodeEntry { code, statement }
}

/// The canonical full P501 disposal text mandated by GHS. Used wholesale
/// by the parser's truncation repair.
pub const P501_CANONICAL_TEXT: &str =
    "Dispose of contents/container in accordance with local/regional/national/international regulations.";

/// The full precautionary registry, ordered by code within each block.
pub const P_CODES: &[PCodeEntry] = &[
    // ── Prevention ───────────────────────────────────────────────────
    p("P201", "Obtain special instructions before use."),
    p("P202", "Do not handle until all safety precautions have been read and understood."),
    p("P210", "Keep away from heat, hot surfaces, sparks, open flames and other ignition sources. No smoking."),
    p("P211", "Do not spray on an open flame or other ignition source."),
    p("P220", "Keep away from clothing and other combustible materials."),
    p("P221", "Take any precaution to avoid mixing with combustibles."),
    p("P222", "Do not allow contact with air."),
    p("P223", "Do not allow contact with water."),
    p("P230", "Keep wetted with water."),
    p("P231", "Handle under inert gas."),
    p("P232", "Protect from moisture."),
    p("P233", "Keep container tightly closed."),
    p("P234", "Keep only in original container."),
    p("P235", "Keep cool."),
    p("P240", "Ground/bond container and receiving equipment."),
    p("P241", "Use explosion-proof electrical/ventilating/lighting equipment."),
    p("P242", "Use only non-sparking tools."),
    p("P243", "Take precautionary measures against static discharge."),
    p("P244", "Keep valves and fittings free from oil and grease."),
    p("P250", "Do not subject to grinding/shock/friction."),
    p("P251", "Pressurized container: Do not pierce or burn, even after use."),
    p("P260", "Do not breathe dust/fume/gas/mist/vapors/spray."),
    p("P261", "Avoid breathing dust/fume/gas/mist/vapors/spray."),
    p("P262", "Do not get in eyes, on skin, or on clothing."),
    p("P263", "Avoid contact during pregnancy/while nursing."),
    p("P264", "Wash hands thoroughly after handling."),
    p("P270", "Do not eat, drink or smoke when using this product."),
    p("P271", "Use only outdoors or in a well-ventilated area."),
    p("P272", "Contaminated work clothing should not be allowed out of the workplace."),
    p("P273", "Avoid release to the environment."),
    p("P280", "Wear protective gloves/protective clothing/eye protection/face protection."),
    p("P281", "Use personal protective equipment as required."),
    p("P282", "Wear cold insulating gloves/face shield/eye protection."),
    p("P283", "Wear fire/flame resistant/retardant clothing."),
    p("P284", "Wear respiratory protection."),
    p("P285", "In case of inadequate ventilation wear respiratory protection."),
    // ── Response ─────────────────────────────────────────────────────
    p("P301", "IF SWALLOWED:"),
    p("P302", "IF ON SKIN:"),
    p("P303", "IF ON SKIN (or hair):"),
    p("P304", "IF INHALED:"),
    p("P305", "IF IN EYES:"),
    p("P306", "IF ON CLOTHING:"),
    p("P307", "IF exposed:"),
    p("P308", "IF exposed or concerned:"),
    p("P309", "IF exposed or if you feel unwell:"),
    p("P310", "Immediately call a POISON CENTER or doctor/physician."),
    p("P311", "Call a POISON CENTER or doctor/physician."),
    p("P312", "Call a POISON CENTER or doctor/physician if you feel unwell."),
    p("P313", "Get medical advice/attention."),
    p("P314", "Get medical advice/attention if you feel unwell."),
    p("P315", "Get immediate medical advice/attention."),
    p("P320", "Specific treatment is urgent (see supplemental first aid instructions on this label)."),
    p("P321", "Specific treatment (see supplemental first aid instructions on this label)."),
    p("P322", "Specific measures (see supplemental first aid instructions on this label)."),
    p("P330", "Rinse mouth."),
    p("P331", "Do NOT induce vomiting."),
    p("P332", "If skin irritation occurs:"),
    p("P333", "If skin irritation or rash occurs:"),
    p("P334", "Immerse in cool water/wrap in wet bandages."),
    p("P335", "Brush off loose particles from skin."),
    p("P336", "Thaw frosted parts with lukewarm water. Do not rub affected area."),
    p("P337", "If eye irritation persists:"),
    p("P338", "Remove contact lenses, if present and easy to do. Continue rinsing."),
    p("P340", "Remove person to fresh air and keep comfortable for breathing."),
    p("P341", "If breathing is difficult, remove person to fresh air and keep comfortable for breathing."),
    p("P342", "If experiencing respiratory symptoms:"),
    p("P350", "Gently wash with plenty of soap and water."),
    p("P351", "Rinse cautiously with water for several minutes."),
    p("P352", "Wash with plenty of soap and water."),
    p("P353", "Rinse skin with water/shower."),
    p("P360", "Rinse immediately contaminated clothing and skin with plenty of water before removing clothes."),
    p("P361", "Remove/Take off immediately all contaminated clothing."),
    p("P362", "Take off contaminated clothing and wash before reuse."),
    p("P363", "Wash contaminated clothing before reuse."),
    p("P364", "And wash it before reuse."),
    p("P370", "In case of fire:"),
    p("P371", "In case of major fire and large quantities:"),
    p("P372", "Explosion risk in case of fire."),
    p("P373", "DO NOT fight fire when fire reaches explosives."),
    p("P374", "Fight fire with normal precautions from a reasonable distance."),
    p("P375", "Fight fire remotely due to the risk of explosion."),
    p("P376", "Stop leak if safe to do so."),
    p("P377", "Leaking gas fire: Do not extinguish, unless leak can be stopped safely."),
    p("P378", "Use dry sand, dry chemical or alcohol-resistant foam for extinction."),
    p("P380", "Evacuate area."),
    p("P381", "Eliminate all ignition sources if safe to do so."),
    p("P390", "Absorb spillage to prevent material damage."),
    p("P391", "Collect spillage."),
    // ── Storage ──────────────────────────────────────────────────────
    p("P401", "Store in accordance with local/regional/national/international regulations."),
    p("P402", "Store in a dry place."),
    p("P403", "Store in a well-ventilated place."),
    p("P404", "Store in a closed container."),
    p("P405", "Store locked up."),
    p("P406", "Store in corrosive resistant container with resistant inner liner."),
    p("P407", "Maintain air gap between stacks/pallets."),
    p("P410", "Protect from sunlight."),
    p("P411", "Store at temperatures not exceeding specified temperature."),
    p("P412", "Do not expose to temperatures exceeding 50°C/122°F."),
    p("P413", "Store bulk masses greater than specified value at temperatures not exceeding specified temperature."),
    p("P420", "Store away from other materials."),
    // ── Disposal ─────────────────────────────────────────────────────
    p("P501", P501_CANONICAL_TEXT),
    p("P502", "Refer to manufacturer or supplier for information on recovery or recycling."),
    // ── Combined codes ───────────────────────────────────────────────
    p("P301+P310", "IF SWALLOWED: Immediately call a POISON CENTER or doctor/physician."),
    p("P301+P312", "IF SWALLOWED: Call a POISON CENTER or doctor/physician if you feel unwell."),
    p("P301+P330+P331", "IF SWALLOWED: Rinse mouth. Do NOT induce vomiting."),
    p("P302+P334", "IF ON SKIN: Immerse in cool water/wrap in wet bandages."),
    p("P302+P350", "IF ON SKIN: Gently wash with plenty of soap and water."),
    p("P302+P352", "IF ON SKIN: Wash with plenty of soap and water."),
    p("P303+P361+P353", "IF ON SKIN (or hair): Remove/Take off immediately all contaminated clothing. Rinse skin with water/shower."),
    p("P304+P312", "IF INHALED: Call a POISON CENTER or doctor/physician if you feel unwell."),
    p("P304+P340", "IF INHALED: Remove person to fresh air and keep comfortable for breathing."),
    p("P304+P341", "IF INHALED: If breathing is difficult, remove person to fresh air and keep comfortable for breathing."),
    p("P305+P351+P338", "IF IN EYES: Rinse cautiously with water for several minutes. Remove contact lenses, if present and easy to do. Continue rinsing."),
    p("P306+P360", "IF ON CLOTHING: Rinse immediately contaminated clothing and skin with plenty of water before removing clothes."),
    p("P307+P311", "IF exposed: Call a POISON CENTER or doctor/physician."),
    p("P308+P313", "IF exposed or concerned: Get medical advice/attention."),
    p("P309+P311", "IF exposed or if you feel unwell: Call a POISON CENTER or doctor/physician."),
    p("P332+P313", "If skin irritation occurs: Get medical advice/attention."),
    p("P333+P313", "If skin irritation or rash occurs: Get medical advice/attention."),
    p("P335+P334", "Brush off loose particles from skin. Immerse in cool water/wrap in wet bandages."),
    p("P337+P313", "If eye irritation persists: Get medical advice/attention."),
    p("P342+P311", "If experiencing respiratory symptoms: Call a POISON CENTER or doctor/physician."),
    p("P370+P376", "In case of fire: Stop leak if safe to do so."),
    p("P370+P378", "In case of fire: Use dry sand, dry chemical or alcohol-resistant foam for extinction."),
    p("P370+P380", "In case of fire: Evacuate area."),
    p("P370+P380+P375", "In case of fire: Evacuate area. Fight fire remotely due to the risk of explosion."),
    p("P371+P380+P375", "In case of major fire and large quantities: Evacuate area. Fight fire remotely due to the risk of explosion."),
    p("P402+P404", "Store in a dry place. Store in a closed container."),
    p("P403+P233", "Store in a well-ventilated place. Keep container tightly closed."),
    p("P403+P235", "Store in a well-ventilated place. Keep cool."),
    p("P410+P403", "Protect from sunlight. Store in a well-ventilated place."),
    p("P410+P412", "Protect from sunlight. Do not expose to temperatures exceeding 50°C/122°F."),
];

/// Pairs of precautionary codes that contradict each other on the same
/// label. All known pairs involve P230 ("Keep wetted with water") against
/// the keep-dry family; flagged as warnings, not errors, since supplier
/// SDSs occasionally carry both for multi-component products.
pub const CONTRADICTORY_P_PAIRS: &[(&str, &str)] = &[
    ("P223", "P230"),
    ("P232", "P230"),
    ("P402", "P230"),
];
