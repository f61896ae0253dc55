//! Integration tests running both calculators on realistic profiles.

mod common;

use eco_mix::evaluation::evaluate;
use eco_mix::io::export::write_csv;
use eco_mix::mix::allocation::PV_MAX_PCT;
use eco_mix::{CommunityProfile, MixCalculator, SubsidyEstimator};

#[test]
fn residential_block_mix() {
    let r = MixCalculator::default().recommend(&common::residential_block());

    // cap: 68.4 kWp over 200 MWh -> 34 %; base 31 PV / 23 heat pump,
    // geothermal and biomass from budget and zone D, shortfall fills PV to cap
    assert_eq!(r.mix.solar_pv, 34);
    assert_eq!(r.mix.aerothermal, 46);
    assert_eq!(r.mix.geothermal, 10);
    assert_eq!(r.mix.biomass, 10);
    assert_eq!(r.mix.micro_hydro, 0);
    assert_eq!(r.mix.total(), 100);

    assert!(!r.install_battery);
    assert!(r.install_heat_pump);
}

#[test]
fn riverside_workshop_mix() {
    let r = MixCalculator::default().recommend(&common::riverside_workshop());

    // north roof caps PV at 6 %; micro-hydro from the river
    assert_eq!(r.mix.solar_pv, 6);
    assert_eq!(r.mix.micro_hydro, 10);
    assert_eq!(r.mix.geothermal, 0);
    assert_eq!(r.mix.biomass, 0);
    assert_eq!(r.mix.aerothermal, 84);
    assert!(!r.install_battery);
    assert!(!r.install_heat_pump);
    assert_eq!(r.heat_pump_savings_pct, 0);
}

#[test]
fn residential_block_subsidies() {
    let s = SubsidyEstimator.estimate(&common::residential_block());
    assert_eq!(s.estimated_reduction_pct, 45);
    assert_eq!(s.score, 100);
}

#[test]
fn industrial_site_only_national() {
    let s = SubsidyEstimator.estimate(&common::riverside_workshop());
    assert!(!s.eligibility.nextgen);
    assert!(s.eligibility.national);
    assert!(!s.eligibility.regional);
    assert!(!s.eligibility.municipal);
    assert_eq!(s.score, 30);
}

#[test]
fn results_are_deterministic() {
    let calc = MixCalculator::default();
    let p = common::residential_block();
    assert_eq!(calc.recommend(&p), calc.recommend(&p));
    assert_eq!(SubsidyEstimator.estimate(&p), SubsidyEstimator.estimate(&p));
}

#[test]
fn pathological_inputs_fall_through_defaults() {
    let p = CommunityProfile {
        electricity_kwh: Some(-5_000.0),
        thermal_kwh: Some(f64::NAN),
        roof_area_m2: Some(-10.0),
        budget: Some(-1.0),
        climate_zone: Some("Ñ".into()),
        roof_orientation: Some("???".into()),
        ..CommunityProfile::default()
    };
    let r = MixCalculator::default().recommend(&p);
    assert_eq!(r.mix.total(), 100);
    assert!(r.mix.solar_pv <= PV_MAX_PCT);

    let s = SubsidyEstimator.estimate(&p);
    assert_eq!(s.score, 0);
}

#[test]
fn batch_csv_has_row_per_profile() {
    let calc = MixCalculator::default();
    let evaluations: Vec<_> = [common::residential_block(), common::riverside_workshop()]
        .iter()
        .map(|p| evaluate(p, &calc))
        .collect();

    let mut buf = Vec::new();
    write_csv(&evaluations, &mut buf).expect("csv write should succeed");
    let text = String::from_utf8(buf).expect("csv should be UTF-8");
    let rows: Vec<&str> = text.lines().collect();

    assert_eq!(rows.len(), 3);
    assert!(rows[1].starts_with("cp-001,Comunidad Los Olmos,34,46,10,10,0,false,true,"));
    assert!(rows[1].ends_with(",45,true,true,true,true,100"));
    assert!(rows[2].starts_with("cp-002,Talleres del Ebro,6,84,0,0,10,false,false,"));
    assert!(rows[2].ends_with(",35,false,true,false,false,30"));
}
