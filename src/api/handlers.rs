//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;

use super::AppState;
use super::types::{ErrorResponse, RootResponse};
use crate::mix::RecommendationResult;
use crate::profile::CommunityProfile;
use crate::subsidy::SubsidyResult;

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

/// Maps a body extraction failure to its status with a JSON error body.
fn reject(rejection: JsonRejection) -> (StatusCode, Json<ErrorResponse>) {
    tracing::warn!(status = %rejection.status(), "rejected request body: {rejection}");
    (
        rejection.status(),
        Json(ErrorResponse {
            error: rejection.body_text(),
        }),
    )
}

/// `GET /` → 200 + `RootResponse` JSON
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse::default())
}

/// Computes the technology mix for a community profile.
///
/// `POST /recomendaciones` → 200 + `RecommendationResult` JSON
/// Malformed body → 4xx + `ErrorResponse`
pub async fn post_recommendations(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CommunityProfile>, JsonRejection>,
) -> ApiResult<RecommendationResult> {
    let Json(profile) = body.map_err(reject)?;
    let result = state.calculator.recommend(&profile);
    tracing::info!(
        community = profile.name.as_deref().unwrap_or_default(),
        pv_pct = result.mix.solar_pv,
        savings_kwh = result.energy_savings_1y_kwh,
        "recommendation computed"
    );
    Ok(Json(result))
}

/// Estimates subsidy eligibility for a community profile.
///
/// `POST /subvenciones` → 200 + `SubsidyResult` JSON
/// Malformed body → 4xx + `ErrorResponse`
pub async fn post_subsidies(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CommunityProfile>, JsonRejection>,
) -> ApiResult<SubsidyResult> {
    let Json(profile) = body.map_err(reject)?;
    let result = state.estimator.estimate(&profile);
    tracing::info!(
        community = profile.name.as_deref().unwrap_or_default(),
        score = result.score,
        "subsidy eligibility computed"
    );
    Ok(Json(result))
}
