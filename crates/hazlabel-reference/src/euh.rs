//! # EU Supplemental Hazard Registry
//!
//! EUH codes are EU-specific supplemental hazard statements layered on
//! top of the UN GHS vocabulary. A handful are triggered by the chemical
//! identity itself rather than by classification; those product-keyword
//! rules live here too.

/// One entry in the EUH supplemental registry.
#[derive(Debug, Clone, Copy)]
pub struct EuhEntry {
    /// The EUH code.
    pub code: &'static str,
    /// Official statement text.
    pub statement: &'static str,
}

const fn e(code: &'static str, statement: &'static str) -> EuhEntry {
    EuhEntry { code, statement }
}

/// The EUH registry.
pub const EUH_CODES: &[EuhEntry] = &[
    e("EUH001", "Explosive when dry."),
    e("EUH006", "Explosive with or without contact with air."),
    e("EUH014", "Reacts violently with water."),
    e("EUH018", "In use, may form flammable/explosive vapor-air mixture."),
    e("EUH019", "May form explosive peroxides."),
    e("EUH029", "Contact with water liberates toxic gas."),
    e("EUH031", "Contact with acids liberates toxic gas."),
    e("EUH032", "Contact with acids liberates very toxic gas."),
    e("EUH044", "Risk of explosion if heated under confinement."),
    e("EUH066", "Repeated exposure may cause skin dryness or cracking."),
    e("EUH070", "Toxic by eye contact."),
    e("EUH071", "Corrosive to the respiratory tract."),
    e("EUH201", "Contains lead. Should not be used on surfaces liable to be chewed or sucked by children."),
    e("EUH202", "Cyanoacrylate. Danger. Bonds skin and eyes in seconds. Keep out of the reach of children."),
    e("EUH203", "Contains chromium (VI). May produce an allergic reaction."),
    e("EUH204", "Contains isocyanates. May produce an allergic reaction."),
    e("EUH205", "Contains epoxy constituents. May produce an allergic reaction."),
    e("EUH206", "Warning! Do not use together with other products. May release dangerous gases (chlorine)."),
    e("EUH207", "Warning! Contains cadmium. Dangerous fumes are formed during use. See information supplied by the manufacturer. Comply with the safety instructions."),
    e("EUH208", "Contains sensitizing substance. May produce an allergic reaction."),
    e("EUH209", "Can become highly flammable in use."),
    e("EUH210", "Safety data sheet available on request."),
    e("EUH401", "To avoid risks to human health and the environment, comply with the instructions for use."),
];

/// A product-name keyword that mandates specific EUH codes.
#[derive(Debug, Clone, Copy)]
pub struct ProductEuhRule {
    /// Case-insensitive substring matched against the product identifier.
    pub keyword: &'static str,
    /// EUH codes the match requires on the label.
    pub euh_codes: &'static [&'static str],
}

/// Chemical-identity EUH requirements, matched by product-name substring.
pub const PRODUCT_EUH_RULES: &[ProductEuhRule] = &[
    ProductEuhRule { keyword: "sodium hypochlorite", euh_codes: &["EUH031"] },
    ProductEuhRule { keyword: "hypochlorite", euh_codes: &["EUH031"] },
    ProductEuhRule { keyword: "bleach", euh_codes: &["EUH031"] },
    ProductEuhRule { keyword: "chlorine", euh_codes: &["EUH031"] },
];
