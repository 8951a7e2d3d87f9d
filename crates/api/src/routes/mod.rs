//! HTTP handlers. Each one accepts `GET` only.

pub mod health;
pub mod root;

use axum::http::Method;

use crate::error::ApiError;

/// Rejects every method other than `GET`, `HEAD` included.
pub(crate) fn require_get(method: &Method) -> Result<(), ApiError> {
    if method == Method::GET {
        Ok(())
    } else {
        Err(ApiError::MethodNotAllowed)
    }
}
