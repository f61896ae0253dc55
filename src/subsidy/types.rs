//! Output types of the subsidy estimator.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::tiers::SubsidyTier;

/// Per-tier eligibility flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eligibility {
    #[serde(rename = "eligible_nextgen")]
    pub nextgen: bool,
    #[serde(rename = "eligible_nacional")]
    pub national: bool,
    #[serde(rename = "eligible_regional")]
    pub regional: bool,
    #[serde(rename = "eligible_municipal")]
    pub municipal: bool,
}

impl Eligibility {
    pub fn get(&self, tier: SubsidyTier) -> bool {
        match tier {
            SubsidyTier::NextGen => self.nextgen,
            SubsidyTier::National => self.national,
            SubsidyTier::Regional => self.regional,
            SubsidyTier::Municipal => self.municipal,
        }
    }

    pub(crate) fn set(&mut self, tier: SubsidyTier, eligible: bool) {
        match tier {
            SubsidyTier::NextGen => self.nextgen = eligible,
            SubsidyTier::National => self.national = eligible,
            SubsidyTier::Regional => self.regional = eligible,
            SubsidyTier::Municipal => self.municipal = eligible,
        }
    }

    /// Weighted sum of eligible tiers (0 to 100).
    pub fn score(&self) -> u32 {
        SubsidyTier::ALL
            .iter()
            .filter(|t| self.get(**t))
            .map(|t| t.weight())
            .sum()
    }
}

/// Full result returned by `POST /subvenciones`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubsidyResult {
    #[serde(rename = "subvenciones")]
    pub eligibility: Eligibility,
    /// Tier key → criterion name → met.
    #[serde(rename = "criterios")]
    pub criteria: BTreeMap<String, BTreeMap<String, bool>>,
    /// Achievable energy reduction estimated from roof area.
    #[serde(rename = "reduccion_estimada_pct")]
    pub estimated_reduction_pct: u32,
    /// Fixed-weight heuristic, not a probability.
    #[serde(rename = "puntuacion_elegibilidad")]
    pub score: u32,
}

impl fmt::Display for SubsidyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Subsidies ---")?;
        for tier in SubsidyTier::ALL {
            writeln!(f, "{:<10} {}", tier.key(), self.eligibility.get(tier))?;
        }
        writeln!(f, "Estimated reduction: {}%", self.estimated_reduction_pct)?;
        write!(f, "Eligibility score:   {}/100", self.score)
    }
}
