//! Static reference data for international location names.
//!
//! None of this depends on the scanned file; it is printed alongside the
//! scan so the font can be sized for user-entered city names.

use std::collections::BTreeSet;

/// Glyphs the firmware font ships with today.
pub const CURRENTLY_SUPPORTED: &str = "°¿ÉÊÍÓÜßáäçèéíñóöúûü‐→";

/// Characters common in location names, per region.
pub const LOCATION_REGIONS: [(&str, &str); 7] = [
    ("Scandinavian", "åæøÅÆØ"),
    ("German/Austrian", "äöüßÄÖÜ"),
    ("French", "àâäçéèêëïîôùûüÿÀÂÄÇÉÈÊËÏÎÔÙÛÜŸ"),
    ("Spanish", "ñáéíóúüÑÁÉÍÓÚÜ"),
    ("Italian", "àèéìíîòóùúÀÈÉÌÍÎÒÓÙÚ"),
    ("Eastern European", "ąćęłńóśźżĄĆĘŁŃÓŚŹŻ"),
    ("Czech/Slovak", "áčďéěíňóřšťúůýžÁČĎÉĚÍŇÓŘŠŤÚŮÝŽ"),
];

pub const SAMPLE_LOCATIONS: [&str; 10] = [
    "Spånga, Sweden",
    "Malmö, Sweden",
    "København, Denmark",
    "Tromsø, Norway",
    "Zürich, Switzerland",
    "München, Germany",
    "Kraków, Poland",
    "České Budějovice, Czech Republic",
    "São Paulo, Brazil",
    "México City, Mexico",
];

/// Union of every region's characters.
#[must_use]
pub fn recommended_set() -> BTreeSet<char> {
    LOCATION_REGIONS
        .iter()
        .flat_map(|(_, chars)| chars.chars())
        .collect()
}

/// Recommended characters the font does not cover yet.
#[must_use]
pub fn missing(supported: &BTreeSet<char>) -> BTreeSet<char> {
    recommended_set().difference(supported).copied().collect()
}
