//! Battery and heat-pump decisions plus multi-year savings projections.

use serde::Deserialize;

use super::types::EnergyMix;

/// PV share at or above which a battery is recommended.
pub const BATTERY_MIN_PV_PCT: u32 = 40;
pub const BATTERY_SAVINGS_PCT: u32 = 8;
pub const HEAT_PUMP_SAVINGS_PCT: u32 = 18;
/// Annual thermal use above which a heat pump is recommended (kWh).
pub const HEAT_PUMP_MIN_THERMAL_KWH: f64 = 30_000.0;

const BOILER_KEYWORDS: &[&str] = &["caldera", "boiler"];

/// Weights applied to each share when estimating the savings fraction.
const PV_SAVINGS_WEIGHT: f64 = 0.5;
const AEROTHERMAL_SAVINGS_WEIGHT: f64 = 0.3;
const HEAT_PUMP_BONUS_WEIGHT: f64 = 0.1;

/// Conversion rates from saved energy to money and emissions.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Rates {
    /// Money saved per kWh avoided.
    pub eur_per_kwh: f64,
    /// CO2 avoided per kWh (kg).
    pub co2_kg_per_kwh: f64,
}

impl Default for Rates {
    fn default() -> Self {
        Self {
            eur_per_kwh: 0.75,
            co2_kg_per_kwh: 0.9,
        }
    }
}

pub fn install_battery(requested: bool, pv_pct: u32) -> bool {
    requested || pv_pct >= BATTERY_MIN_PV_PCT
}

/// Heat pump replaces boiler-type heating or serves a large thermal load.
///
/// `heating` is expected lower-cased.
pub fn install_heat_pump(heating: &str, thermal_kwh: f64) -> bool {
    BOILER_KEYWORDS.iter().any(|k| heating.contains(k)) || thermal_kwh > HEAT_PUMP_MIN_THERMAL_KWH
}

/// A quantity projected linearly over one, three and five years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    pub one_year: i64,
    pub three_years: i64,
    pub five_years: i64,
}

impl Projection {
    /// No compounding and no degradation.
    pub fn linear(one_year: i64) -> Self {
        Self {
            one_year,
            three_years: one_year.saturating_mul(3),
            five_years: one_year.saturating_mul(5),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavingsEstimate {
    pub energy_kwh: Projection,
    pub money: Projection,
    pub co2_kg: Projection,
}

/// Fraction of total demand the mix is expected to save.
pub fn savings_fraction(mix: &EnergyMix, heat_pump_savings_pct: u32) -> f64 {
    (f64::from(mix.solar_pv) * PV_SAVINGS_WEIGHT
        + f64::from(mix.aerothermal) * AEROTHERMAL_SAVINGS_WEIGHT
        + f64::from(heat_pump_savings_pct) * HEAT_PUMP_BONUS_WEIGHT)
        / 100.0
}

/// Projects energy, money and CO2 savings.
///
/// Every conversion truncates toward zero; money and CO2 derive from
/// the already-truncated one-year kWh figure.
///
/// # Arguments
///
/// * `mix` - Normalised technology mix
/// * `heat_pump_savings_pct` - 18 when a heat pump is installed, else 0
/// * `total_demand_kwh` - Annual electricity plus thermal use
/// * `rates` - Money and CO2 conversion rates
pub fn estimate_savings(
    mix: &EnergyMix,
    heat_pump_savings_pct: u32,
    total_demand_kwh: f64,
    rates: &Rates,
) -> SavingsEstimate {
    let fraction = savings_fraction(mix, heat_pump_savings_pct);
    let kwh = (total_demand_kwh * fraction) as i64;
    let money = (kwh as f64 * rates.eur_per_kwh) as i64;
    let co2 = (kwh as f64 * rates.co2_kg_per_kwh) as i64;

    SavingsEstimate {
        energy_kwh: Projection::linear(kwh),
        money: Projection::linear(money),
        co2_kg: Projection::linear(co2),
    }
}
