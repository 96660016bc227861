use serde::Serialize;

use crate::error::ApiError;

pub mod body;
pub mod favorite;
pub mod people;
pub mod planet;
pub mod site;
pub mod user;

/// `{"message": ...}` success envelope.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Success envelope for creates, carrying the new row id.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub id: i32,
}

/// Parse an `{id}` path segment. Anything that is not an `i32` can never
/// match a row, so it fails with `missing` like an unknown id would.
pub fn parse_id(raw: &str, missing: ApiError) -> Result<i32, ApiError> {
    raw.parse().map_err(|_| missing)
}
