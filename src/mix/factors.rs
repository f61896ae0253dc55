//! Climate and orientation multipliers.

use crate::profile::ClimateZone;

/// Factor applied when the zone is missing or not a letter A to E.
pub const DEFAULT_CLIMATE_FACTOR: f64 = 0.9;

/// Heating-efficiency multiplier for a climate zone.
///
/// Milder zones keep heat pumps at full efficiency; colder zones derate
/// them. Unknown zones fall back to [`DEFAULT_CLIMATE_FACTOR`].
pub fn climate_factor(zone: Option<ClimateZone>) -> f64 {
    match zone {
        Some(ClimateZone::A) => 1.0,
        Some(ClimateZone::B) => 0.95,
        Some(ClimateZone::C) => 0.9,
        Some(ClimateZone::D) => 0.85,
        Some(ClimateZone::E) => 0.8,
        None => DEFAULT_CLIMATE_FACTOR,
    }
}

/// Photovoltaic yield derating from free-text roof orientation.
///
/// Expects lower-cased text. Only an explicit "norte" or "north" gets
/// the north derating; "noreste" and "noroeste" contain "este" and
/// count as east/west.
pub fn orientation_factor(orientation: &str) -> f64 {
    if orientation.contains("norte") || orientation.contains("north") {
        0.55
    } else if ["este", "oeste", "east", "west"]
        .iter()
        .any(|k| orientation.contains(k))
    {
        0.80
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabulated_climate_factors() {
        assert_eq!(climate_factor(Some(ClimateZone::A)), 1.0);
        assert_eq!(climate_factor(Some(ClimateZone::B)), 0.95);
        assert_eq!(climate_factor(Some(ClimateZone::C)), 0.9);
        assert_eq!(climate_factor(Some(ClimateZone::D)), 0.85);
        assert_eq!(climate_factor(Some(ClimateZone::E)), 0.8);
    }

    #[test]
    fn unknown_zone_uses_default() {
        assert_eq!(climate_factor(None), 0.9);
        assert_eq!(climate_factor(ClimateZone::parse("Z")), 0.9);
    }

    #[test]
    fn orientation_keywords() {
        assert_eq!(orientation_factor("norte"), 0.55);
        assert_eq!(orientation_factor("north-facing"), 0.55);
        assert_eq!(orientation_factor("noreste"), 0.80);
        assert_eq!(orientation_factor("noroeste"), 0.80);
        assert_eq!(orientation_factor("este"), 0.80);
        assert_eq!(orientation_factor("oeste"), 0.80);
        assert_eq!(orientation_factor("west"), 0.80);
        assert_eq!(orientation_factor("sur"), 1.0);
        assert_eq!(orientation_factor(""), 1.0);
        assert_eq!(orientation_factor("plano"), 1.0);
    }
}
