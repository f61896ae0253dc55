//! Output types of the mix calculator.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Percentage allocation across the five supported technologies.
///
/// A normalised mix always totals exactly 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyMix {
    #[serde(rename = "mix_fotovoltaica_pct")]
    pub solar_pv: u32,
    /// Air-source heat pump ("aerotermia").
    #[serde(rename = "mix_aerotermia_pct")]
    pub aerothermal: u32,
    #[serde(rename = "mix_geotermia_pct")]
    pub geothermal: u32,
    #[serde(rename = "mix_biomasa_pct")]
    pub biomass: u32,
    #[serde(rename = "mix_microhidraulica_pct")]
    pub micro_hydro: u32,
}

impl EnergyMix {
    /// Sum of all five shares.
    pub fn total(&self) -> u32 {
        self.solar_pv + self.aerothermal + self.geothermal + self.biomass + self.micro_hydro
    }

    pub(crate) fn shares_mut(&mut self) -> [&mut u32; 5] {
        [
            &mut self.solar_pv,
            &mut self.aerothermal,
            &mut self.geothermal,
            &mut self.biomass,
            &mut self.micro_hydro,
        ]
    }
}

impl fmt::Display for EnergyMix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PV {}% | aero {}% | geo {}% | biomass {}% | micro-hydro {}%",
            self.solar_pv, self.aerothermal, self.geothermal, self.biomass, self.micro_hydro
        )
    }
}

/// Full recommendation returned by `POST /recomendaciones`.
///
/// Multi-year figures are linear multiples of the one-year figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    /// Human-readable summary naming the community and the final mix.
    #[serde(rename = "recomendacion_final")]
    pub narrative: String,
    #[serde(flatten)]
    pub mix: EnergyMix,
    #[serde(rename = "instalar_bateria")]
    pub install_battery: bool,
    #[serde(rename = "pct_ahorro_bateria")]
    pub battery_savings_pct: u32,
    #[serde(rename = "instalar_bomba_calor")]
    pub install_heat_pump: bool,
    #[serde(rename = "pct_ahorro_bomba_calor")]
    pub heat_pump_savings_pct: u32,
    #[serde(rename = "ahorro_1anio_kwh")]
    pub energy_savings_1y_kwh: i64,
    #[serde(rename = "ahorro_3anios_kwh")]
    pub energy_savings_3y_kwh: i64,
    #[serde(rename = "ahorro_5anios_kwh")]
    pub energy_savings_5y_kwh: i64,
    #[serde(rename = "ahorro_1anio_eur")]
    pub money_savings_1y: i64,
    #[serde(rename = "ahorro_3anios_eur")]
    pub money_savings_3y: i64,
    #[serde(rename = "ahorro_5anios_eur")]
    pub money_savings_5y: i64,
    #[serde(rename = "co2_1anio_kg")]
    pub co2_avoided_1y_kg: i64,
    #[serde(rename = "co2_3anios_kg")]
    pub co2_avoided_3y_kg: i64,
    #[serde(rename = "co2_5anios_kg")]
    pub co2_avoided_5y_kg: i64,
}

impl fmt::Display for RecommendationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Recommendation ---")?;
        writeln!(f, "Mix:                 {}", self.mix)?;
        writeln!(
            f,
            "Battery:             {} ({}% savings)",
            self.install_battery, self.battery_savings_pct
        )?;
        writeln!(
            f,
            "Heat pump:           {} ({}% savings)",
            self.install_heat_pump, self.heat_pump_savings_pct
        )?;
        writeln!(
            f,
            "Energy saved:        {} / {} / {} kWh (1/3/5 y)",
            self.energy_savings_1y_kwh, self.energy_savings_3y_kwh, self.energy_savings_5y_kwh
        )?;
        writeln!(
            f,
            "Money saved:         {} / {} / {} (1/3/5 y)",
            self.money_savings_1y, self.money_savings_3y, self.money_savings_5y
        )?;
        write!(
            f,
            "CO2 avoided:         {} / {} / {} kg (1/3/5 y)",
            self.co2_avoided_1y_kg, self.co2_avoided_3y_kg, self.co2_avoided_5y_kg
        )
    }
}
