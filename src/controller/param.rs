use axum::{extract::FromRequestParts, http::request::Parts};
use serde::Deserialize;

use crate::error::AppError;

/// Header carrying the identity of the calling user.
pub static SHARER_USER_ID_HEADER: &str = "X-Sharer-User-Id";

/// Identity extractor: reads the calling user's ID from the
/// `X-Sharer-User-Id` header.
///
/// A missing or non-integer header is rejected with `400 Bad Request` before
/// the handler runs.
pub struct SharerUserId(pub i32);

impl<S> FromRequestParts<S> for SharerUserId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts.headers.get(SHARER_USER_ID_HEADER).ok_or_else(|| {
            AppError::Validation(format!("{} header is missing", SHARER_USER_ID_HEADER))
        })?;

        let user_id = header
            .to_str()
            .ok()
            .and_then(|value| value.trim().parse::<i32>().ok())
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "{} header must be an integer",
                    SHARER_USER_ID_HEADER
                ))
            })?;

        Ok(Self(user_id))
    }
}

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub from: i64,
    #[serde(default = "default_size")]
    pub size: i64,
}

/// Pagination plus the optional booking state filter.
#[derive(Deserialize)]
pub struct BookingListParams {
    pub state: Option<String>,
    #[serde(default)]
    pub from: i64,
    #[serde(default = "default_size")]
    pub size: i64,
}

#[derive(Deserialize)]
pub struct DecisionParams {
    pub approved: bool,
}

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub text: String,
}

fn default_size() -> i64 {
    10
}
