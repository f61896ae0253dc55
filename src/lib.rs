//! Rules-based renewable mix and subsidy eligibility calculator.

#[cfg(feature = "api")]
pub mod api;
pub mod config;
pub mod error;
pub mod evaluation;
/// File output formats.
pub mod io;
pub mod logging;
/// Technology mix recommendation.
pub mod mix;
pub mod profile;
/// Subsidy tier eligibility.
pub mod subsidy;

pub use error::{Error, Result};
pub use mix::{MixCalculator, RecommendationResult};
pub use profile::CommunityProfile;
pub use subsidy::{SubsidyEstimator, SubsidyResult};
