use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;

/// Status of a booking. Stored in the database as its SCREAMING_SNAKE_CASE
/// string form; converted at the repository boundary.
#[derive(Serialize, Deserialize, PartialEq, Eq, Copy, Clone, Debug, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Waiting,
    Approved,
    Rejected,
}

impl BookingStatus {
    /// The string form persisted in the `booking.status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "WAITING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }

    /// Converts a persisted status string back into the enum.
    ///
    /// The column is only ever written from `as_str`, so an unknown value means
    /// the row was corrupted outside the application.
    ///
    /// # Returns
    /// - `Ok(BookingStatus)` - Parsed status
    /// - `Err(AppError::InternalError)` - Unknown status value in the database
    pub fn from_db(value: &str) -> Result<Self, AppError> {
        match value {
            "WAITING" => Ok(Self::Waiting),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            other => Err(AppError::InternalError(format!(
                "Unknown booking status '{}' in database",
                other
            ))),
        }
    }
}

/// State filter for booking listings.
///
/// CURRENT, PAST and FUTURE are evaluated against a single `now` timestamp
/// captured once per listing call; WAITING and REJECTED match the stored
/// status.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum StateFilter {
    All,
    Current,
    Past,
    Future,
    Waiting,
    Rejected,
}

impl StateFilter {
    /// Parses the `state` query parameter. A missing parameter means ALL.
    ///
    /// Matching is exact and case-sensitive.
    ///
    /// # Returns
    /// - `Ok(StateFilter)` - Parsed filter
    /// - `Err(AppError::Validation)` - `"Unknown state: <value>"`
    pub fn parse(value: Option<&str>) -> Result<Self, AppError> {
        match value {
            None => Ok(Self::All),
            Some("ALL") => Ok(Self::All),
            Some("CURRENT") => Ok(Self::Current),
            Some("PAST") => Ok(Self::Past),
            Some("FUTURE") => Ok(Self::Future),
            Some("WAITING") => Ok(Self::Waiting),
            Some("REJECTED") => Ok(Self::Rejected),
            Some(other) => Err(AppError::Validation(format!("Unknown state: {}", other))),
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingDto {
    pub item_id: i32,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Shortened item view embedded in a booking response.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BookedItemDto {
    pub id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: i32,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub status: BookingStatus,
    pub booker: crate::model::user::UserDto,
    pub item: BookedItemDto,
}
