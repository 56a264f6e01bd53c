//! Comment service and eligibility rule.
//!
//! A user may comment on an item only after a completed, approved rental: the
//! item's booking history must hold at least one APPROVED booking by that user
//! whose end time has passed.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::{
    data::{booking::BookingRepository, comment::CommentRepository, item::ItemRepository,
        user::UserRepository},
    error::AppError,
    model::booking::BookingStatus,
    model::item::{CommentDto, CreateCommentDto},
};

/// Returns whether the user holds a completed, approved booking of the item.
///
/// Pure predicate over an already-fetched booking list; `now` is the instant
/// "completed" is evaluated against.
pub fn can_comment(user_id: i32, bookings: &[entity::booking::Model], now: DateTime<Utc>) -> bool {
    bookings.iter().any(|b| {
        b.booker_id == user_id && b.status == BookingStatus::Approved.as_str() && b.end < now
    })
}

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Posts a comment on an item.
    ///
    /// # Arguments
    /// - `item_id` - ID of the commented item
    /// - `author_id` - ID of the commenting user
    /// - `dto` - The comment text
    ///
    /// # Returns
    /// - `Ok(CommentDto)` - The created comment with a server-assigned
    ///   creation time
    /// - `Err(AppError::NotFound)` - User or item missing
    /// - `Err(AppError::Validation)` - Blank text, or the author has no
    ///   completed approved booking of the item
    pub async fn post_comment(
        &self,
        item_id: i32,
        author_id: i32,
        dto: CreateCommentDto,
    ) -> Result<CommentDto, AppError> {
        let text = dto.text.trim().to_string();
        if text.is_empty() {
            return Err(AppError::Validation(
                "Comment text must not be blank".to_string(),
            ));
        }

        let author = UserRepository::new(self.db)
            .get_by_id(author_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let item = ItemRepository::new(self.db)
            .get_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Item not found".to_string()))?;

        let now = Utc::now();
        let bookings = BookingRepository::new(self.db).find_by_item(item.id).await?;

        if !can_comment(author.id, &bookings, now) {
            return Err(AppError::Validation(format!(
                "User with ID={} cannot comment on item with ID={} without a completed booking",
                author.id, item.id
            )));
        }

        let comment = CommentRepository::new(self.db)
            .create(item.id, author.id, text, now)
            .await?;

        Ok(CommentDto {
            id: comment.id,
            text: comment.text,
            author_name: author.name,
            created: comment.created,
        })
    }

    /// Gets all comments of one item with their author names, oldest first.
    pub async fn get_for_item(&self, item_id: i32) -> Result<Vec<CommentDto>, AppError> {
        let comments = CommentRepository::new(self.db).find_by_item(item_id).await?;

        self.with_author_names(comments).await
    }

    /// Gets the comments of several items grouped by item ID, for
    /// batch-building item listings.
    pub async fn get_for_items(
        &self,
        item_ids: Vec<i32>,
    ) -> Result<HashMap<i32, Vec<CommentDto>>, AppError> {
        let comments = CommentRepository::new(self.db).find_by_items(item_ids).await?;

        let mut grouped: HashMap<i32, Vec<CommentDto>> = HashMap::new();
        let item_of: Vec<i32> = comments.iter().map(|c| c.item_id).collect();

        for (dto, item_id) in self.with_author_names(comments).await?.into_iter().zip(item_of) {
            grouped.entry(item_id).or_default().push(dto);
        }

        Ok(grouped)
    }

    /// Resolves author names for a batch of comments, preserving order.
    async fn with_author_names(
        &self,
        comments: Vec<entity::comment::Model>,
    ) -> Result<Vec<CommentDto>, AppError> {
        let author_ids: Vec<i32> = comments.iter().map(|c| c.author_id).collect();
        let authors: HashMap<i32, entity::user::Model> = UserRepository::new(self.db)
            .find_by_ids(author_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        comments
            .into_iter()
            .map(|comment| {
                let author = authors.get(&comment.author_id).ok_or_else(|| {
                    AppError::InternalError(format!(
                        "Comment {} references missing user {}",
                        comment.id, comment.author_id
                    ))
                })?;

                Ok(CommentDto {
                    id: comment.id,
                    text: comment.text,
                    author_name: author.name.clone(),
                    created: comment.created,
                })
            })
            .collect()
    }
}
