//! Offline evaluation of profiles loaded from JSON files.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::mix::{MixCalculator, RecommendationResult};
use crate::profile::CommunityProfile;
use crate::subsidy::{SubsidyEstimator, SubsidyResult};

/// Both results for one profile, as printed by `--profile`.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub id: Option<String>,
    #[serde(rename = "nombre_comunidad")]
    pub name: Option<String>,
    #[serde(rename = "recomendacion")]
    pub recommendation: RecommendationResult,
    #[serde(rename = "subvenciones")]
    pub subsidy: SubsidyResult,
}

/// Runs both calculators on a profile.
pub fn evaluate(profile: &CommunityProfile, calculator: &MixCalculator) -> Evaluation {
    Evaluation {
        id: profile.id.clone(),
        name: profile.name.clone(),
        recommendation: calculator.recommend(profile),
        subsidy: SubsidyEstimator.estimate(profile),
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| Error::Profile {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a single profile object.
///
/// # Errors
///
/// Returns [`Error::Read`] or [`Error::Profile`].
pub fn load_profile(path: &Path) -> Result<CommunityProfile> {
    read_json(path)
}

/// A batch file holds either one profile object or an array of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum ProfileBatch {
    Many(Vec<CommunityProfile>),
    One(Box<CommunityProfile>),
}

/// Loads profiles for a batch run, from an array or a single object.
///
/// # Errors
///
/// Returns [`Error::Read`] or [`Error::Profile`].
pub fn load_profiles(path: &Path) -> Result<Vec<CommunityProfile>> {
    Ok(match read_json(path)? {
        ProfileBatch::Many(profiles) => profiles,
        ProfileBatch::One(profile) => vec![*profile],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluation_carries_identity_and_both_results() {
        let profile = CommunityProfile {
            id: Some("cp-17".into()),
            name: Some("Torre Norte".into()),
            ..CommunityProfile::default()
        };
        let eval = evaluate(&profile, &MixCalculator::default());
        assert_eq!(eval.id.as_deref(), Some("cp-17"));
        assert_eq!(eval.recommendation.mix.total(), 100);
        assert_eq!(eval.subsidy.score, 0);

        let json = serde_json::to_value(&eval).expect("evaluation should serialize");
        assert!(json["recomendacion"]["mix_fotovoltaica_pct"].is_number());
        assert!(json["subvenciones"]["puntuacion_elegibilidad"].is_number());
    }

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("eco-mix-{}-{name}", std::process::id()));
        fs::write(&path, contents).expect("temp file should be writable");
        path
    }

    #[test]
    fn batch_accepts_array_or_single_object() {
        let array = write_temp(
            "array.json",
            r#"[{"id": "a"}, {"id": "b", "num_viviendas": 8}]"#,
        );
        let single = write_temp("single.json", r#"{"id": "solo"}"#);

        let many = load_profiles(&array).expect("array should load");
        let one = load_profiles(&single).expect("object should load");
        let _ = fs::remove_file(&array);
        let _ = fs::remove_file(&single);

        assert_eq!(many.len(), 2);
        assert_eq!(many[1].dwellings(), 8);
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].id.as_deref(), Some("solo"));
    }

    #[test]
    fn batch_rejects_scalar_json() {
        let path = write_temp("scalar.json", "42");
        let err = load_profiles(&path);
        let _ = fs::remove_file(&path);
        assert!(matches!(err, Err(Error::Profile { .. })));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_profile(Path::new("/nonexistent/profile.json"));
        assert!(matches!(err, Err(Error::Read { .. })));
    }
}
