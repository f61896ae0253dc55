//! Community input record shared by both calculators.
//!
//! Every field is optional on the wire. Defaults are applied by the
//! accessor methods at read time, never at deserialization, so the raw
//! record always reflects exactly what the caller sent.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Descriptive attributes of a residential or building community.
///
/// Field names on the wire follow the Spanish schema used by the HTTP
/// surface (`electricidad_kwh`, `zona_climatica`, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommunityProfile {
    /// Caller-provided identifier, echoed in batch exports.
    pub id: Option<String>,
    #[serde(rename = "nombre_comunidad")]
    pub name: Option<String>,
    #[serde(rename = "provincia")]
    pub province: Option<String>,
    #[serde(rename = "municipio")]
    pub municipality: Option<String>,
    /// Free text, e.g. "residencial plurifamiliar" or "nave industrial".
    #[serde(rename = "tipo_edificio")]
    pub building_type: Option<String>,
    #[serde(rename = "anio_construccion", deserialize_with = "deserialize_whole")]
    pub construction_year: Option<i32>,
    #[serde(rename = "num_viviendas", deserialize_with = "deserialize_whole")]
    pub dwellings: Option<u32>,
    #[serde(rename = "num_plantas", deserialize_with = "deserialize_whole")]
    pub floors: Option<u32>,
    /// Annual electricity use (kWh).
    #[serde(rename = "electricidad_kwh")]
    pub electricity_kwh: Option<f64>,
    /// Annual thermal use (kWh).
    #[serde(rename = "termica_kwh")]
    pub thermal_kwh: Option<f64>,
    /// Free text listing sources already available on site.
    #[serde(rename = "fuentes_energia")]
    pub energy_sources: Option<String>,
    /// Usable roof area (m²).
    #[serde(rename = "area_techo_m2")]
    pub roof_area_m2: Option<f64>,
    #[serde(rename = "orientacion")]
    pub roof_orientation: Option<String>,
    #[serde(rename = "tipo_calefaccion")]
    pub heating_system: Option<String>,
    /// Whether a battery is already installed or explicitly requested.
    #[serde(rename = "bateria", deserialize_with = "deserialize_flag")]
    pub battery: Option<bool>,
    #[serde(rename = "codigo_postal", deserialize_with = "deserialize_code")]
    pub postal_code: Option<String>,
    /// Climate zone letter (A to E).
    #[serde(rename = "zona_climatica")]
    pub climate_zone: Option<String>,
    #[serde(rename = "gasto_mensual")]
    pub monthly_spend: Option<f64>,
    #[serde(rename = "presupuesto")]
    pub budget: Option<f64>,
}

impl CommunityProfile {
    pub fn electricity_kwh(&self) -> f64 {
        self.electricity_kwh.unwrap_or(0.0)
    }

    pub fn thermal_kwh(&self) -> f64 {
        self.thermal_kwh.unwrap_or(0.0)
    }

    /// Electricity plus thermal use (kWh).
    pub fn total_demand_kwh(&self) -> f64 {
        self.electricity_kwh() + self.thermal_kwh()
    }

    pub fn roof_area_m2(&self) -> f64 {
        self.roof_area_m2.unwrap_or(0.0)
    }

    pub fn budget(&self) -> f64 {
        self.budget.unwrap_or(0.0)
    }

    /// Number of dwellings, defaulting to a single one.
    pub fn dwellings(&self) -> u32 {
        self.dwellings.unwrap_or(1)
    }

    pub fn construction_year(&self) -> i32 {
        self.construction_year.unwrap_or(0)
    }

    pub fn battery_requested(&self) -> bool {
        self.battery.unwrap_or(false)
    }

    /// Parsed climate zone, `None` when absent or not a letter A to E.
    pub fn zone(&self) -> Option<ClimateZone> {
        self.climate_zone.as_deref().and_then(ClimateZone::parse)
    }

    /// Lower-cased roof orientation, empty when absent.
    pub fn orientation_text(&self) -> String {
        lowered(&self.roof_orientation)
    }

    pub fn heating_text(&self) -> String {
        lowered(&self.heating_system)
    }

    pub fn building_type_text(&self) -> String {
        lowered(&self.building_type)
    }

    pub fn energy_sources_text(&self) -> String {
        lowered(&self.energy_sources)
    }
}

fn lowered(field: &Option<String>) -> String {
    field.as_deref().unwrap_or_default().to_lowercase()
}

/// Spanish building-code climate zone, from mildest (A) to coldest (E).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClimateZone {
    A,
    B,
    C,
    D,
    E,
}

impl ClimateZone {
    /// Parses a zone letter, ignoring surrounding whitespace and case.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_uppercase().as_str() {
            "A" => Some(Self::A),
            "B" => Some(Self::B),
            "C" => Some(Self::C),
            "D" => Some(Self::D),
            "E" => Some(Self::E),
            _ => None,
        }
    }
}

impl fmt::Display for ClimateZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
        };
        f.write_str(letter)
    }
}

/// Wire forms accepted for a yes/no field.
#[derive(Deserialize)]
#[serde(untagged)]
enum FlagRepr {
    Bool(bool),
    Number(f64),
    Text(String),
}

/// Wire forms accepted for a whole-number or code field.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberRepr {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Accepts integers, integral floats and numeric text.
///
/// Fractional values and numbers outside the target range are treated
/// as absent, so a negative dwelling count reads as "not given".
fn deserialize_whole<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let repr = Option::<NumberRepr>::deserialize(deserializer)?;
    let whole = repr.and_then(|r| match r {
        NumberRepr::Int(n) => Some(n),
        NumberRepr::Float(f) => whole_from_float(f),
        NumberRepr::Text(s) => s.trim().parse::<f64>().ok().and_then(whole_from_float),
    });
    Ok(whole.and_then(|n| T::try_from(n).ok()))
}

fn whole_from_float(f: f64) -> Option<i64> {
    (f.is_finite() && f.fract() == 0.0).then_some(f as i64)
}

/// Accepts text or a bare number, e.g. a postal code sent as `28001`.
fn deserialize_code<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let repr = Option::<NumberRepr>::deserialize(deserializer)?;
    Ok(repr.map(|r| match r {
        NumberRepr::Int(n) => n.to_string(),
        NumberRepr::Float(f) => f.to_string(),
        NumberRepr::Text(s) => s,
    }))
}

/// Accepts booleans, numbers and "sí"/"no" style strings.
///
/// Unrecognised text is treated as absent rather than rejected.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let repr = Option::<FlagRepr>::deserialize(deserializer)?;
    Ok(repr.and_then(|r| match r {
        FlagRepr::Bool(b) => Some(b),
        FlagRepr::Number(n) => Some(n != 0.0),
        FlagRepr::Text(s) => match s.trim().to_lowercase().as_str() {
            "sí" | "si" | "yes" | "true" | "1" => Some(true),
            "no" | "false" | "0" | "" => Some(false),
            _ => None,
        },
    }))
}
