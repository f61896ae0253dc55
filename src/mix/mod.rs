//! Renewable technology mix recommendation.
//!
//! [`MixCalculator::recommend`] is a pure function of the profile: it
//! never fails, and missing or nonsensical inputs fall through to the
//! default branches of each rule.

pub mod allocation;
/// Climate and orientation multipliers.
pub mod factors;
/// Templated recommendation text.
pub mod narrative;
pub mod savings;
pub mod types;

pub use savings::Rates;
pub use types::{EnergyMix, RecommendationResult};

use crate::profile::CommunityProfile;

/// Derives a technology mix, equipment flags and savings projections.
#[derive(Debug, Clone, Copy, Default)]
pub struct MixCalculator {
    rates: Rates,
}

impl MixCalculator {
    pub fn new(rates: Rates) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &Rates {
        &self.rates
    }

    /// Computes the full recommendation for a community.
    pub fn recommend(&self, profile: &CommunityProfile) -> RecommendationResult {
        let climate = factors::climate_factor(profile.zone());
        let orientation = factors::orientation_factor(&profile.orientation_text());
        tracing::debug!(climate, orientation, "site factors");

        let (mix, pv_cap) = allocation::allocate(profile, climate, orientation);

        let install_battery = savings::install_battery(profile.battery_requested(), mix.solar_pv);
        let install_heat_pump =
            savings::install_heat_pump(&profile.heating_text(), profile.thermal_kwh());
        let battery_savings_pct = if install_battery {
            savings::BATTERY_SAVINGS_PCT
        } else {
            0
        };
        let heat_pump_savings_pct = if install_heat_pump {
            savings::HEAT_PUMP_SAVINGS_PCT
        } else {
            0
        };

        let est = savings::estimate_savings(
            &mix,
            heat_pump_savings_pct,
            profile.total_demand_kwh(),
            &self.rates,
        );

        tracing::debug!(
            pv_cap,
            install_battery,
            install_heat_pump,
            savings_kwh = est.energy_kwh.one_year,
            "mix recommended: {mix}"
        );

        RecommendationResult {
            narrative: narrative::narrative(profile, &mix),
            mix,
            install_battery,
            battery_savings_pct,
            install_heat_pump,
            heat_pump_savings_pct,
            energy_savings_1y_kwh: est.energy_kwh.one_year,
            energy_savings_3y_kwh: est.energy_kwh.three_years,
            energy_savings_5y_kwh: est.energy_kwh.five_years,
            money_savings_1y: est.money.one_year,
            money_savings_3y: est.money.three_years,
            money_savings_5y: est.money.five_years,
            co2_avoided_1y_kg: est.co2_kg.one_year,
            co2_avoided_3y_kg: est.co2_kg.three_years,
            co2_avoided_5y_kg: est.co2_kg.five_years,
        }
    }
}
