//! Item request factory for creating test item request entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test item requests with customizable fields.
pub struct RequestFactory<'a> {
    db: &'a DatabaseConnection,
    requester_id: i32,
    description: String,
    created: DateTime<Utc>,
}

impl<'a> RequestFactory<'a> {
    /// Creates a new RequestFactory with default values.
    ///
    /// Defaults:
    /// - description: `"Request {id}"` where id is auto-incremented
    /// - created: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `requester_id` - ID of the requesting user (must exist)
    pub fn new(db: &'a DatabaseConnection, requester_id: i32) -> Self {
        Self {
            db,
            requester_id,
            description: format!("Request {}", next_id()),
            created: Utc::now(),
        }
    }

    /// Sets the request's description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the request's creation timestamp.
    pub fn created(mut self, created: DateTime<Utc>) -> Self {
        self.created = created;
        self
    }

    /// Inserts the item request into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created item request
    /// - `Err(DbErr)` - Database error
    pub async fn build(self) -> Result<entity::item_request::Model, DbErr> {
        entity::item_request::ActiveModel {
            requester_id: ActiveValue::Set(self.requester_id),
            description: ActiveValue::Set(self.description),
            created: ActiveValue::Set(self.created),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an item request with default values.
///
/// # Arguments
/// - `db` - Database connection
/// - `requester_id` - ID of the requesting user
///
/// # Returns
/// - `Ok(Model)` - The created item request
/// - `Err(DbErr)` - Database error
pub async fn create_request(
    db: &DatabaseConnection,
    requester_id: i32,
) -> Result<entity::item_request::Model, DbErr> {
    RequestFactory::new(db, requester_id).build().await
}
