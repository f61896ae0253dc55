//! Templated recommendation text.

use super::types::EnergyMix;
use crate::profile::CommunityProfile;

const DEFAULT_COMMUNITY_NAME: &str = "la comunidad";

/// " de {municipio} ({provincia})" when either part is known, else empty.
fn location_suffix(profile: &CommunityProfile) -> String {
    let municipality = profile.municipality.as_deref().unwrap_or_default();
    let province = profile.province.as_deref().unwrap_or_default();
    if municipality.is_empty() && province.is_empty() {
        String::new()
    } else {
        format!(" de {municipality} ({province})")
    }
}

/// Builds the Spanish summary naming the community and the final mix.
pub fn narrative(profile: &CommunityProfile, mix: &EnergyMix) -> String {
    let name = profile
        .name
        .as_deref()
        .filter(|n| !n.is_empty())
        .unwrap_or(DEFAULT_COMMUNITY_NAME);
    let location = location_suffix(profile);

    format!(
        "Para {name}{location}, la solución óptima recomendada se basa en un mix energético \
         formado por {}% de fotovoltaica, {}% de aerotermia, {}% de geotermia, {}% de biomasa \
         y {}% de microhidráulica. Este mix se adapta a la demanda real del edificio, su \
         superficie disponible, la orientación del tejado y las condiciones climáticas de la \
         zona, maximizando el ahorro energético global y la reducción de emisiones.",
        mix.solar_pv, mix.aerothermal, mix.geothermal, mix.biomass, mix.micro_hydro
    )
}
