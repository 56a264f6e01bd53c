use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateRequestDto {
    pub description: String,
}

/// Item listed in a request response: an item another user created to fulfill
/// the request.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestedItemDto {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub request_id: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestDto {
    pub id: i32,
    pub description: String,
    pub created: DateTime<Utc>,
    pub items: Vec<RequestedItemDto>,
}

impl From<entity::item::Model> for RequestedItemDto {
    fn from(item: entity::item::Model) -> Self {
        Self {
            id: item.id,
            owner_id: item.owner_id,
            name: item.name,
            description: item.description,
            available: item.available,
            request_id: item.request_id,
        }
    }
}
