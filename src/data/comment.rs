//! Comment data repository for database operations.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

/// Repository providing database operations for item comments.
pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    /// Creates a new CommentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new comment.
    ///
    /// # Arguments
    /// - `item_id` - ID of the commented item
    /// - `author_id` - ID of the comment's author
    /// - `text` - Comment body
    /// - `created` - Server-assigned creation timestamp
    ///
    /// # Returns
    /// - `Ok(Model)` - The created comment
    /// - `Err(DbErr)` - Database error
    pub async fn create(
        &self,
        item_id: i32,
        author_id: i32,
        text: String,
        created: DateTime<Utc>,
    ) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            item_id: ActiveValue::Set(item_id),
            author_id: ActiveValue::Set(author_id),
            text: ActiveValue::Set(text),
            created: ActiveValue::Set(created),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all comments of one item, oldest first.
    pub async fn find_by_item(&self, item_id: i32) -> Result<Vec<entity::comment::Model>, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::ItemId.eq(item_id))
            .order_by_asc(entity::comment::Column::Created)
            .all(self.db)
            .await
    }

    /// Gets all comments of any of the given items, oldest first, for
    /// batch-building the owner's item listing.
    pub async fn find_by_items(
        &self,
        item_ids: Vec<i32>,
    ) -> Result<Vec<entity::comment::Model>, DbErr> {
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Comment::find()
            .filter(entity::comment::Column::ItemId.is_in(item_ids))
            .order_by_asc(entity::comment::Column::Created)
            .all(self.db)
            .await
    }
}
