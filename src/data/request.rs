//! Item request data repository for database operations.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

/// Repository providing database operations for item requests.
pub struct RequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RequestRepository<'a> {
    /// Creates a new RequestRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new item request.
    ///
    /// # Arguments
    /// - `requester_id` - ID of the requesting user
    /// - `description` - What is being asked for
    /// - `created` - Server-assigned creation timestamp
    ///
    /// # Returns
    /// - `Ok(Model)` - The created request
    /// - `Err(DbErr)` - Database error
    pub async fn create(
        &self,
        requester_id: i32,
        description: String,
        created: DateTime<Utc>,
    ) -> Result<entity::item_request::Model, DbErr> {
        entity::item_request::ActiveModel {
            requester_id: ActiveValue::Set(requester_id),
            description: ActiveValue::Set(description),
            created: ActiveValue::Set(created),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a request by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The request
    /// - `Ok(None)` - Request not found
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::item_request::Model>, DbErr> {
        entity::prelude::ItemRequest::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets all requests posted by a user, newest first.
    pub async fn find_by_requester(
        &self,
        requester_id: i32,
    ) -> Result<Vec<entity::item_request::Model>, DbErr> {
        entity::prelude::ItemRequest::find()
            .filter(entity::item_request::Column::RequesterId.eq(requester_id))
            .order_by_desc(entity::item_request::Column::Created)
            .all(self.db)
            .await
    }

    /// Gets a page of the requests posted by everyone except the given user,
    /// newest first.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user whose own requests are excluded
    /// - `offset` - Number of requests to skip
    /// - `limit` - Maximum number of requests to return
    pub async fn find_others(
        &self,
        user_id: i32,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<entity::item_request::Model>, DbErr> {
        entity::prelude::ItemRequest::find()
            .filter(entity::item_request::Column::RequesterId.ne(user_id))
            .order_by_desc(entity::item_request::Column::Created)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await
    }
}
