//! Subsidy tiers and their eligibility criteria.

use std::fmt;

/// Construction-year cutoff: only buildings older than this qualify for NextGen.
pub const NEXTGEN_BUILT_BEFORE: i32 = 2007;
pub const NEXTGEN_MIN_REDUCTION_PCT: u32 = 30;
pub const NATIONAL_MIN_REDUCTION_PCT: u32 = 35;
pub const NATIONAL_MIN_BUDGET: f64 = 20_000.0;
pub const REGIONAL_MIN_DWELLINGS: u32 = 4;
pub const REGIONAL_MAX_BUDGET: f64 = 1_000_000.0;
/// Municipal programmes only cover budgets strictly below this.
pub const MUNICIPAL_BUDGET_LIMIT: f64 = 500_000.0;

const RESIDENTIAL_KEYWORDS: &[&str] = &[
    "residencial",
    "vivienda",
    "plurifamiliar",
    "unifamiliar",
    "comunidad de propietarios",
    "residential",
];

/// Government programme level, from broadest to most local.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SubsidyTier {
    /// EU Next Generation recovery funds.
    NextGen,
    National,
    Regional,
    Municipal,
}

impl SubsidyTier {
    pub const ALL: [Self; 4] = [Self::NextGen, Self::National, Self::Regional, Self::Municipal];

    /// Contribution to the composite score when eligible. Weights sum to 100.
    pub fn weight(self) -> u32 {
        match self {
            Self::NextGen => 40,
            Self::National => 30,
            Self::Regional => 20,
            Self::Municipal => 10,
        }
    }

    /// Wire key used in the criteria breakdown.
    pub fn key(self) -> &'static str {
        match self {
            Self::NextGen => "nextgen",
            Self::National => "nacional",
            Self::Regional => "regional",
            Self::Municipal => "municipal",
        }
    }
}

impl fmt::Display for SubsidyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Profile facts the tier rules are evaluated against.
///
/// Absent inputs arrive here as their read-time defaults and simply
/// fail whichever criterion needs them.
#[derive(Debug, Clone, Copy)]
pub struct EligibilityFacts {
    pub construction_year: i32,
    pub reduction_pct: u32,
    pub residential: bool,
    pub valid_zone: bool,
    pub budget: f64,
    pub dwellings: u32,
}

/// Residential-use keyword match on lower-cased building type text.
pub fn is_residential(building_type: &str) -> bool {
    RESIDENTIAL_KEYWORDS
        .iter()
        .any(|k| building_type.contains(k))
}

/// Named sub-criteria for a tier. The tier is eligible iff all hold.
pub fn criteria(tier: SubsidyTier, facts: &EligibilityFacts) -> Vec<(&'static str, bool)> {
    match tier {
        SubsidyTier::NextGen => vec![
            (
                "anterior_2007",
                facts.construction_year > 0 && facts.construction_year < NEXTGEN_BUILT_BEFORE,
            ),
            (
                "reduccion_minima_30",
                facts.reduction_pct >= NEXTGEN_MIN_REDUCTION_PCT,
            ),
            ("uso_residencial", facts.residential),
            ("zona_climatica_valida", facts.valid_zone),
        ],
        SubsidyTier::National => vec![
            (
                "reduccion_minima_35",
                facts.reduction_pct >= NATIONAL_MIN_REDUCTION_PCT,
            ),
            ("zona_climatica_valida", facts.valid_zone),
            ("presupuesto_minimo", facts.budget >= NATIONAL_MIN_BUDGET),
        ],
        SubsidyTier::Regional => vec![
            ("uso_residencial", facts.residential),
            ("viviendas_minimas", facts.dwellings >= REGIONAL_MIN_DWELLINGS),
            (
                "presupuesto_en_rango",
                facts.budget > 0.0 && facts.budget <= REGIONAL_MAX_BUDGET,
            ),
        ],
        SubsidyTier::Municipal => vec![
            ("uso_residencial", facts.residential),
            (
                "presupuesto_municipal",
                facts.budget > 0.0 && facts.budget < MUNICIPAL_BUDGET_LIMIT,
            ),
        ],
    }
}
