//! Comment factory for creating test comment entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a comment with a generated text, created at the current time.
///
/// # Arguments
/// - `db` - Database connection
/// - `item_id` - ID of the commented item
/// - `author_id` - ID of the comment's author
///
/// # Returns
/// - `Ok(Model)` - The created comment
/// - `Err(DbErr)` - Database error
pub async fn create_comment(
    db: &DatabaseConnection,
    item_id: i32,
    author_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    entity::comment::ActiveModel {
        item_id: ActiveValue::Set(item_id),
        author_id: ActiveValue::Set(author_id),
        text: ActiveValue::Set(format!("Comment {}", next_id())),
        created: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
