//! Subsidy eligibility estimation across four programme tiers.

pub mod tiers;
pub mod types;

use std::collections::BTreeMap;

pub use tiers::SubsidyTier;
pub use types::{Eligibility, SubsidyResult};

use crate::profile::CommunityProfile;
use tiers::EligibilityFacts;

/// Achievable energy reduction from roof area, as a fixed step function.
pub fn estimated_reduction_pct(roof_area_m2: f64) -> u32 {
    if roof_area_m2 > 400.0 {
        55
    } else if roof_area_m2 > 200.0 {
        45
    } else if roof_area_m2 > 100.0 {
        35
    } else {
        30
    }
}

/// Evaluates every tier rule for a community.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubsidyEstimator;

impl SubsidyEstimator {
    pub fn new() -> Self {
        Self
    }

    /// Computes per-tier eligibility, the criteria breakdown and the score.
    pub fn estimate(&self, profile: &CommunityProfile) -> SubsidyResult {
        let facts = EligibilityFacts {
            construction_year: profile.construction_year(),
            reduction_pct: estimated_reduction_pct(profile.roof_area_m2()),
            residential: tiers::is_residential(&profile.building_type_text()),
            valid_zone: profile.zone().is_some(),
            budget: profile.budget(),
            dwellings: profile.dwellings(),
        };

        let mut eligibility = Eligibility::default();
        let mut criteria: BTreeMap<String, BTreeMap<String, bool>> = BTreeMap::new();
        for tier in SubsidyTier::ALL {
            let checks = tiers::criteria(tier, &facts);
            eligibility.set(tier, checks.iter().all(|(_, met)| *met));
            criteria.insert(
                tier.key().to_string(),
                checks
                    .into_iter()
                    .map(|(name, met)| (name.to_string(), met))
                    .collect(),
            );
        }

        let score = eligibility.score();
        tracing::debug!(
            reduction_pct = facts.reduction_pct,
            score,
            ?eligibility,
            "subsidy eligibility estimated"
        );

        SubsidyResult {
            eligibility,
            criteria,
            estimated_reduction_pct: facts.reduction_pct,
            score,
        }
    }
}
