//! Greeting endpoint, also used for every unmatched path.

use axum::http::Method;

use crate::error::ApiError;

pub const GREETING: &str = "Hello from Go API";

/// GET / — plain-text greeting.
pub async fn greet(method: Method) -> Result<&'static str, ApiError> {
    super::require_get(&method)?;
    Ok(GREETING)
}
