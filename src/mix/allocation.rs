//! Percentage allocation across technologies.
//!
//! The allocation runs in three passes: a demand-proportional base mix
//! of PV and heat pump, optional technologies gated on budget, climate
//! and site keywords, and a final normalisation that makes the shares
//! total exactly 100 without pushing PV over its installable cap.

use super::types::EnergyMix;
use crate::profile::CommunityProfile;

/// Installable PV peak power per square metre of roof (kWp/m²).
pub const PV_KWP_PER_M2: f64 = 0.18;
/// Upper bound on the PV share regardless of roof size.
pub const PV_MAX_PCT: u32 = 75;
/// Guards the capacity ratio against zero demand (MWh).
const DEMAND_EPSILON_MWH: f64 = 1e-6;

/// Mix used when there is no demand to split.
const ZERO_DEMAND_MIX: (u32, u32) = (60, 40);
/// Share of electricity demand routed to PV, scaled by the electric ratio.
const PV_BASE_PCT: f64 = 70.0;
/// Share of thermal demand routed to heat pump, scaled by ratio and climate.
const AEROTHERMAL_BASE_PCT: f64 = 50.0;

/// Budget above which geothermal drilling is considered.
pub const GEOTHERMAL_MIN_BUDGET: f64 = 250_000.0;
/// Climate factor at or below which the zone counts as cold for geothermal.
const GEOTHERMAL_MAX_CLIMATE: f64 = 0.9;
/// Climate factor at or below which biomass is worth adding.
const BIOMASS_MAX_CLIMATE: f64 = 0.85;
/// Fixed share granted to each optional technology.
pub const OPTIONAL_SHARE_PCT: u32 = 10;

const INDUSTRIAL_KEYWORDS: &[&str] = &["industri", "fábrica", "fabrica", "factory"];
const WATER_WORDS: &[&str] = &[
    "río", "rio", "ríos", "rios", "canal", "canales", "acequia", "arroyo", "river",
];

/// Float to percentage: truncates toward zero, clamps to 0..=100, NaN becomes 0.
fn truncate_pct(value: f64) -> u32 {
    (value as u32).min(100)
}

/// Largest PV share the roof can physically support.
///
/// # Arguments
///
/// * `roof_area_m2` - Usable roof area
/// * `orientation_factor` - Yield derating for the roof direction
/// * `total_demand_kwh` - Annual electricity plus thermal use
pub fn pv_cap_pct(roof_area_m2: f64, orientation_factor: f64, total_demand_kwh: f64) -> u32 {
    let installable_kwp = roof_area_m2 * PV_KWP_PER_M2 * orientation_factor;
    let bound = installable_kwp / (total_demand_kwh / 1000.0 + DEMAND_EPSILON_MWH) * 100.0;
    PV_MAX_PCT.min(truncate_pct(bound))
}

/// Splits demand between PV and heat pump by the electric/thermal ratio.
///
/// Returns `(pv_pct, aerothermal_pct)` before any capping.
pub fn base_mix(electricity_kwh: f64, thermal_kwh: f64, climate_factor: f64) -> (u32, u32) {
    let total = electricity_kwh + thermal_kwh;
    if total == 0.0 {
        return ZERO_DEMAND_MIX;
    }
    let ratio_elec = electricity_kwh / total;
    let ratio_term = thermal_kwh / total;
    (
        truncate_pct(PV_BASE_PCT * ratio_elec),
        truncate_pct(AEROTHERMAL_BASE_PCT * ratio_term * climate_factor),
    )
}

pub fn wants_geothermal(budget: f64, climate_factor: f64) -> bool {
    budget > GEOTHERMAL_MIN_BUDGET && climate_factor <= GEOTHERMAL_MAX_CLIMATE
}

pub fn wants_biomass(climate_factor: f64) -> bool {
    climate_factor <= BIOMASS_MAX_CLIMATE
}

/// Micro-hydro needs either an industrial site or running water nearby.
///
/// Both arguments are expected lower-cased. Water keywords match whole
/// words so that e.g. "interior" does not count as "rio".
pub fn wants_micro_hydro(building_type: &str, energy_sources: &str) -> bool {
    let industrial = INDUSTRIAL_KEYWORDS
        .iter()
        .any(|k| building_type.contains(k));
    let water = energy_sources
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| WATER_WORDS.contains(&word));
    industrial || water
}

/// Rescales an over-full mix and hands the shortfall to PV, then heat pump.
///
/// Over 100, every share is scaled by `100 / total` with truncation and
/// the rounding residual goes to PV. Any remaining gap to 100 (including
/// an under-full mix) goes to PV up to `pv_cap`, and the rest to the
/// heat pump share, which has no physical cap.
///
/// Without a roof the cap is 0, so even the 60/40 zero-demand mix ends
/// up as 0 % PV and 100 % aerothermal. Micro-hydro is never used as
/// filler because it depends on the site.
pub fn normalize(mut mix: EnergyMix, pv_cap: u32) -> EnergyMix {
    let total = mix.total();
    if total > 100 {
        let scale = 100.0 / f64::from(total);
        for share in mix.shares_mut() {
            *share = truncate_pct(f64::from(*share) * scale);
        }
    }

    let residual = 100 - mix.total();
    let to_pv = residual.min(pv_cap.saturating_sub(mix.solar_pv));
    mix.solar_pv += to_pv;
    mix.aerothermal += residual - to_pv;
    mix
}

/// Runs every allocation pass for a profile.
///
/// # Arguments
///
/// * `profile` - Community input record
/// * `climate_factor` - From [`super::factors::climate_factor`]
/// * `orientation_factor` - From [`super::factors::orientation_factor`]
///
/// # Returns
///
/// The normalised mix and the PV cap it was held to.
pub fn allocate(
    profile: &CommunityProfile,
    climate_factor: f64,
    orientation_factor: f64,
) -> (EnergyMix, u32) {
    let total = profile.total_demand_kwh();
    let pv_cap = pv_cap_pct(profile.roof_area_m2(), orientation_factor, total);

    let (pv, aero) = base_mix(profile.electricity_kwh(), profile.thermal_kwh(), climate_factor);
    let optional = |wanted: bool| if wanted { OPTIONAL_SHARE_PCT } else { 0 };

    let raw = EnergyMix {
        solar_pv: pv.min(pv_cap),
        aerothermal: aero,
        geothermal: optional(wants_geothermal(profile.budget(), climate_factor)),
        biomass: optional(wants_biomass(climate_factor)),
        micro_hydro: optional(wants_micro_hydro(
            &profile.building_type_text(),
            &profile.energy_sources_text(),
        )),
    };

    tracing::debug!(
        pv_cap,
        raw_total = raw.total(),
        "raw mix before normalisation: {raw}"
    );

    (normalize(raw, pv_cap), pv_cap)
}
