//! Health check endpoint.

use axum::Json;
use axum::http::Method;
use serde::Serialize;

use crate::error::ApiError;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}

/// GET /health — liveness probe.
pub async fn check(method: Method) -> Result<Json<HealthResponse>, ApiError> {
    super::require_get(&method)?;
    Ok(Json(HealthResponse::ok()))
}
