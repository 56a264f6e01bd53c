use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standard JSON body for error responses.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}
