//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use eco_mix::CommunityProfile;

/// Older residential block in a cold zone with a mid-size roof and budget.
pub fn residential_block() -> CommunityProfile {
    CommunityProfile {
        id: Some("cp-001".into()),
        name: Some("Comunidad Los Olmos".into()),
        province: Some("Burgos".into()),
        municipality: Some("Aranda de Duero".into()),
        building_type: Some("Residencial plurifamiliar".into()),
        construction_year: Some(1982),
        dwellings: Some(32),
        floors: Some(6),
        electricity_kwh: Some(90_000.0),
        thermal_kwh: Some(110_000.0),
        energy_sources: Some("red eléctrica, gasóleo".into()),
        roof_area_m2: Some(380.0),
        roof_orientation: Some("Sur".into()),
        heating_system: Some("Caldera centralizada de gasóleo".into()),
        battery: Some(false),
        postal_code: Some("09400".into()),
        climate_zone: Some("D".into()),
        monthly_spend: Some(4_200.0),
        budget: Some(320_000.0),
    }
}

/// Industrial site next to a river, small north-facing roof.
pub fn riverside_workshop() -> CommunityProfile {
    CommunityProfile {
        id: Some("cp-002".into()),
        name: Some("Talleres del Ebro".into()),
        building_type: Some("Nave industrial".into()),
        electricity_kwh: Some(150_000.0),
        thermal_kwh: Some(20_000.0),
        energy_sources: Some("Río Ebro a 200 m".into()),
        roof_area_m2: Some(120.0),
        roof_orientation: Some("Norte".into()),
        climate_zone: Some("B".into()),
        budget: Some(60_000.0),
        ..CommunityProfile::default()
    }
}

/// JSON body equivalent of [`residential_block`], using wire names.
pub const RESIDENTIAL_BLOCK_JSON: &str = r#"{
    "id": "cp-001",
    "nombre_comunidad": "Comunidad Los Olmos",
    "provincia": "Burgos",
    "municipio": "Aranda de Duero",
    "tipo_edificio": "Residencial plurifamiliar",
    "anio_construccion": 1982,
    "num_viviendas": 32,
    "num_plantas": 6,
    "electricidad_kwh": 90000,
    "termica_kwh": 110000,
    "fuentes_energia": "red eléctrica, gasóleo",
    "area_techo_m2": 380,
    "orientacion": "Sur",
    "tipo_calefaccion": "Caldera centralizada de gasóleo",
    "bateria": "no",
    "codigo_postal": "09400",
    "zona_climatica": "D",
    "gasto_mensual": 4200,
    "presupuesto": 320000
}"#;
