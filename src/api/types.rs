//! API response types not owned by the calculators.

use serde::{Deserialize, Serialize};

/// Liveness body for `GET /`.
#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    #[serde(rename = "mensaje")]
    pub message: String,
    #[serde(rename = "servicio")]
    pub service: String,
    pub version: String,
}

impl Default for RootResponse {
    fn default() -> Self {
        Self {
            message: "API operativa".to_string(),
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Error response body for 4xx rejections.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}
