//! Property-based tests for the calculator invariants.

use proptest::prelude::*;

use eco_mix::mix::allocation::{PV_MAX_PCT, normalize, pv_cap_pct};
use eco_mix::mix::factors::{climate_factor, orientation_factor};
use eco_mix::mix::savings::{BATTERY_SAVINGS_PCT, HEAT_PUMP_SAVINGS_PCT};
use eco_mix::mix::EnergyMix;
use eco_mix::profile::ClimateZone;
use eco_mix::subsidy::SubsidyTier;
use eco_mix::{CommunityProfile, MixCalculator, SubsidyEstimator};

fn zone_text() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        prop::sample::select(vec!["A", "b", " C ", "D", "e", "F", "", "zona 3"])
            .prop_map(|s| Some(s.to_string())),
    ]
}

fn orientation_text() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        prop::sample::select(vec!["Sur", "norte", "Este", "oeste", "sureste", "plano"])
            .prop_map(|s| Some(s.to_string())),
    ]
}

prop_compose! {
    fn arb_profile()(
        electricity in prop::option::of(0.0f64..2_000_000.0),
        thermal in prop::option::of(0.0f64..2_000_000.0),
        roof in prop::option::of(0.0f64..5_000.0),
        budget in prop::option::of(0.0f64..2_000_000.0),
        zone in zone_text(),
        orientation in orientation_text(),
        battery in prop::option::of(any::<bool>()),
        heating in prop::option::of(prop::sample::select(vec!["Caldera de gas", "eléctrica", "suelo radiante"])),
        building in prop::option::of(prop::sample::select(vec!["Residencial", "Nave industrial", "oficinas"])),
        sources in prop::option::of(prop::sample::select(vec!["río cercano", "red", "canal"])),
        year in prop::option::of(1900i32..2030),
        dwellings in prop::option::of(0u32..200),
    ) -> CommunityProfile {
        CommunityProfile {
            electricity_kwh: electricity,
            thermal_kwh: thermal,
            roof_area_m2: roof,
            budget,
            climate_zone: zone,
            roof_orientation: orientation,
            battery,
            heating_system: heating.map(str::to_string),
            building_type: building.map(str::to_string),
            energy_sources: sources.map(str::to_string),
            construction_year: year,
            dwellings,
            ..CommunityProfile::default()
        }
    }
}

proptest! {
    #[test]
    fn mix_always_totals_100(profile in arb_profile()) {
        let r = MixCalculator::default().recommend(&profile);
        prop_assert_eq!(r.mix.total(), 100);
    }

    #[test]
    fn pv_never_exceeds_its_cap(profile in arb_profile()) {
        let r = MixCalculator::default().recommend(&profile);
        let orientation = orientation_factor(&profile.orientation_text());
        let cap = pv_cap_pct(profile.roof_area_m2(), orientation, profile.total_demand_kwh());
        prop_assert!(r.mix.solar_pv <= cap);
        prop_assert!(r.mix.solar_pv <= PV_MAX_PCT);
    }

    #[test]
    fn equipment_flags_drive_savings_pct(profile in arb_profile()) {
        let r = MixCalculator::default().recommend(&profile);
        let battery = if r.install_battery { BATTERY_SAVINGS_PCT } else { 0 };
        let heat_pump = if r.install_heat_pump { HEAT_PUMP_SAVINGS_PCT } else { 0 };
        prop_assert_eq!(r.battery_savings_pct, battery);
        prop_assert_eq!(r.heat_pump_savings_pct, heat_pump);
        if profile.battery == Some(true) {
            prop_assert!(r.install_battery);
        }
    }

    #[test]
    fn projections_are_linear(profile in arb_profile()) {
        let r = MixCalculator::default().recommend(&profile);
        prop_assert_eq!(r.energy_savings_3y_kwh, 3 * r.energy_savings_1y_kwh);
        prop_assert_eq!(r.energy_savings_5y_kwh, 5 * r.energy_savings_1y_kwh);
        prop_assert_eq!(r.money_savings_3y, 3 * r.money_savings_1y);
        prop_assert_eq!(r.money_savings_5y, 5 * r.money_savings_1y);
        prop_assert_eq!(r.co2_avoided_3y_kg, 3 * r.co2_avoided_1y_kg);
        prop_assert_eq!(r.co2_avoided_5y_kg, 5 * r.co2_avoided_1y_kg);
    }

    #[test]
    fn savings_never_exceed_demand(profile in arb_profile()) {
        let r = MixCalculator::default().recommend(&profile);
        prop_assert!(r.energy_savings_1y_kwh >= 0);
        prop_assert!(r.energy_savings_1y_kwh as f64 <= profile.total_demand_kwh());
    }

    #[test]
    fn score_is_weighted_sum_of_flags(profile in arb_profile()) {
        let s = SubsidyEstimator.estimate(&profile);
        let expected: u32 = SubsidyTier::ALL
            .iter()
            .filter(|t| s.eligibility.get(**t))
            .map(|t| t.weight())
            .sum();
        prop_assert_eq!(s.score, expected);
        prop_assert!(s.score <= 100);
    }

    #[test]
    fn tier_eligible_iff_all_criteria_met(profile in arb_profile()) {
        let s = SubsidyEstimator.estimate(&profile);
        for tier in SubsidyTier::ALL {
            let all_met = s.criteria[tier.key()].values().all(|met| *met);
            prop_assert_eq!(s.eligibility.get(tier), all_met);
        }
    }

    #[test]
    fn unknown_zone_text_uses_default_factor(raw in "[F-Zf-z0-9 ]{0,4}") {
        prop_assume!(ClimateZone::parse(&raw).is_none());
        prop_assert_eq!(climate_factor(ClimateZone::parse(&raw)), 0.9);
    }

    #[test]
    fn normalize_totals_100_for_any_raw_mix(
        pv in 0u32..=75,
        aero in 0u32..=100,
        geo in prop::sample::select(vec![0u32, 10]),
        bio in prop::sample::select(vec![0u32, 10]),
        micro in prop::sample::select(vec![0u32, 10]),
        cap_slack in 0u32..=25,
    ) {
        let cap = (pv + cap_slack).min(PV_MAX_PCT);
        let out = normalize(
            EnergyMix { solar_pv: pv, aerothermal: aero, geothermal: geo, biomass: bio, micro_hydro: micro },
            cap,
        );
        prop_assert_eq!(out.total(), 100);
        prop_assert!(out.solar_pv <= cap);
    }
}
