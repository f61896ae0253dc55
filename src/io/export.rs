//! CSV export for batch evaluations.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::evaluation::Evaluation;
use crate::subsidy::SubsidyTier;

/// Column header for the batch CSV.
const HEADER: &str = "id,nombre_comunidad,mix_fotovoltaica_pct,mix_aerotermia_pct,\
                      mix_geotermia_pct,mix_biomasa_pct,mix_microhidraulica_pct,\
                      instalar_bateria,instalar_bomba_calor,ahorro_1anio_kwh,\
                      ahorro_1anio_eur,co2_1anio_kg,reduccion_estimada_pct,\
                      eligible_nextgen,eligible_nacional,eligible_regional,\
                      eligible_municipal,puntuacion_elegibilidad";

/// Exports evaluations to a CSV file at the given path.
///
/// # Errors
///
/// Returns a `csv::Error` if file creation or writing fails.
pub fn export_csv(evaluations: &[Evaluation], path: &Path) -> Result<(), csv::Error> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(evaluations, buf)
}

/// Writes one row per evaluation to any writer.
///
/// Produces deterministic output for identical inputs.
///
/// # Errors
///
/// Returns a `csv::Error` if writing fails.
pub fn write_csv(evaluations: &[Evaluation], writer: impl Write) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(',').map(str::trim))?;

    for e in evaluations {
        let r = &e.recommendation;
        let s = &e.subsidy;
        let mut row = vec![
            e.id.clone().unwrap_or_default(),
            e.name.clone().unwrap_or_default(),
            r.mix.solar_pv.to_string(),
            r.mix.aerothermal.to_string(),
            r.mix.geothermal.to_string(),
            r.mix.biomass.to_string(),
            r.mix.micro_hydro.to_string(),
            r.install_battery.to_string(),
            r.install_heat_pump.to_string(),
            r.energy_savings_1y_kwh.to_string(),
            r.money_savings_1y.to_string(),
            r.co2_avoided_1y_kg.to_string(),
            s.estimated_reduction_pct.to_string(),
        ];
        row.extend(
            SubsidyTier::ALL
                .iter()
                .map(|t| s.eligibility.get(*t).to_string()),
        );
        row.push(s.score.to_string());
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}
