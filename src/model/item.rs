use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemDto {
    pub name: String,
    pub description: String,
    /// Required; kept optional in the DTO so a missing value surfaces as a 400
    /// validation failure instead of a deserialization rejection.
    pub available: Option<bool>,
    pub request_id: Option<i32>,
}

/// Partial update. Absent fields are left untouched.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateItemDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
}

/// Booking summary attached to an owner's item view.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummaryDto {
    pub id: i32,
    pub booker_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i32,
    pub text: String,
    pub author_name: String,
    pub created: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateCommentDto {
    pub text: String,
}

/// Item view. `last_booking` and `next_booking` are only populated when the
/// viewer is the item's owner.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub request_id: Option<i32>,
    pub last_booking: Option<BookingSummaryDto>,
    pub next_booking: Option<BookingSummaryDto>,
    pub comments: Vec<CommentDto>,
}

impl ItemDto {
    /// Maps an item entity to its view with no booking summaries and no
    /// comments; callers enrich the view where the endpoint requires it.
    pub fn from_model(item: entity::item::Model) -> Self {
        Self {
            id: item.id,
            owner_id: item.owner_id,
            name: item.name,
            description: item.description,
            available: item.available,
            request_id: item.request_id,
            last_booking: None,
            next_booking: None,
            comments: Vec::new(),
        }
    }
}
