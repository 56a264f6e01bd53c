//! Item service.
//!
//! CRUD and search for shareable items, plus assembly of the owner-facing item
//! view: comments always, last/next booking summaries only when the viewer
//! owns the item.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::{
    data::{booking::BookingRepository, item::ItemRepository, request::RequestRepository,
        user::UserRepository},
    error::AppError,
    model::item::{CreateItemDto, ItemDto, UpdateItemDto},
    service::{comment::CommentService, snapshot},
};

pub struct ItemService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new item owned by the given user.
    ///
    /// # Arguments
    /// - `owner_id` - ID of the owning user, who must exist
    /// - `dto` - Item data; `available` is required
    ///
    /// # Returns
    /// - `Ok(ItemDto)` - The created item
    /// - `Err(AppError::NotFound)` - Owner or referenced request missing
    /// - `Err(AppError::Validation)` - Blank name/description or missing
    ///   availability flag
    pub async fn create(&self, owner_id: i32, dto: CreateItemDto) -> Result<ItemDto, AppError> {
        let owner = UserRepository::new(self.db)
            .get_by_id(owner_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if dto.name.trim().is_empty() {
            return Err(AppError::Validation(
                "Item name must not be blank".to_string(),
            ));
        }
        if dto.description.trim().is_empty() {
            return Err(AppError::Validation(
                "Item description must not be blank".to_string(),
            ));
        }
        let available = dto.available.ok_or_else(|| {
            AppError::Validation("Item availability must be provided".to_string())
        })?;

        if let Some(request_id) = dto.request_id {
            RequestRepository::new(self.db)
                .get_by_id(request_id)
                .await?
                .ok_or_else(|| AppError::NotFound("ItemRequest not found".to_string()))?;
        }

        let item = ItemRepository::new(self.db)
            .create(owner.id, dto.name, dto.description, available, dto.request_id)
            .await?;

        Ok(ItemDto::from_model(item))
    }

    /// Partially updates an item. Only the owner may update; the violation is
    /// reported as `NotFound`, matching the service's error contract.
    ///
    /// # Arguments
    /// - `item_id` - ID of the item to update
    /// - `owner_id` - ID of the requesting user
    /// - `dto` - Fields to change; absent fields are left untouched
    ///
    /// # Returns
    /// - `Ok(ItemDto)` - The updated item
    /// - `Err(AppError::NotFound)` - Item missing or requester is not the owner
    pub async fn update(
        &self,
        item_id: i32,
        owner_id: i32,
        dto: UpdateItemDto,
    ) -> Result<ItemDto, AppError> {
        let repo = ItemRepository::new(self.db);

        let item = repo
            .get_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Item not found".to_string()))?;

        if item.owner_id != owner_id {
            return Err(AppError::NotFound(
                "Only the owner of an item can update it".to_string(),
            ));
        }

        let name = dto.name.unwrap_or_else(|| item.name.clone());
        let description = dto.description.unwrap_or_else(|| item.description.clone());
        let available = dto.available.unwrap_or(item.available);

        let updated = repo.update(item, name, description, available).await?;

        Ok(ItemDto::from_model(updated))
    }

    /// Gets one item with its comments; the availability snapshot is attached
    /// only when the viewer is the item's owner.
    ///
    /// # Arguments
    /// - `item_id` - ID of the item
    /// - `viewer_id` - ID of the requesting user
    ///
    /// # Returns
    /// - `Ok(ItemDto)` - The item view
    /// - `Err(AppError::NotFound)` - Item missing
    pub async fn get_by_id(&self, item_id: i32, viewer_id: i32) -> Result<ItemDto, AppError> {
        let item = ItemRepository::new(self.db)
            .get_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Item not found".to_string()))?;

        let mut dto = ItemDto::from_model(item);
        dto.comments = CommentService::new(self.db).get_for_item(dto.id).await?;

        if viewer_id == dto.owner_id {
            let now = Utc::now();
            let bookings = BookingRepository::new(self.db).find_by_item(dto.id).await?;
            dto.last_booking = snapshot::last_booking(&bookings, now);
            dto.next_booking = snapshot::next_booking(&bookings, now);
        }

        Ok(dto)
    }

    /// Gets a page of a user's items, each with comments and the availability
    /// snapshot (the viewer is the owner here by definition).
    ///
    /// # Arguments
    /// - `owner_id` - ID of the owning user, who must exist
    /// - `from` - Number of items to skip (must be non-negative)
    /// - `size` - Page size (must be positive)
    pub async fn get_for_owner(
        &self,
        owner_id: i32,
        from: i64,
        size: i64,
    ) -> Result<Vec<ItemDto>, AppError> {
        let (offset, limit) = super::to_page(from, size)?;

        UserRepository::new(self.db)
            .get_by_id(owner_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let items = ItemRepository::new(self.db)
            .get_by_owner(owner_id, offset, limit)
            .await?;
        let item_ids: Vec<i32> = items.iter().map(|i| i.id).collect();

        let now = Utc::now();
        let mut bookings_by_item: HashMap<i32, Vec<entity::booking::Model>> = HashMap::new();
        for booking in BookingRepository::new(self.db)
            .find_by_items(item_ids.clone())
            .await?
        {
            bookings_by_item.entry(booking.item_id).or_default().push(booking);
        }

        let mut comments_by_item = CommentService::new(self.db).get_for_items(item_ids).await?;

        Ok(items
            .into_iter()
            .map(|item| {
                let mut dto = ItemDto::from_model(item);
                if let Some(bookings) = bookings_by_item.get(&dto.id) {
                    dto.last_booking = snapshot::last_booking(bookings, now);
                    dto.next_booking = snapshot::next_booking(bookings, now);
                }
                dto.comments = comments_by_item.remove(&dto.id).unwrap_or_default();
                dto
            })
            .collect())
    }

    /// Searches available items by name or description, case-insensitively.
    ///
    /// Blank search text yields an empty list without touching the database.
    ///
    /// # Arguments
    /// - `text` - Search text
    /// - `from` - Number of items to skip (must be non-negative)
    /// - `size` - Page size (must be positive)
    pub async fn search(&self, text: &str, from: i64, size: i64) -> Result<Vec<ItemDto>, AppError> {
        let (offset, limit) = super::to_page(from, size)?;

        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }

        let items = ItemRepository::new(self.db)
            .search(&needle, offset, limit)
            .await?;

        Ok(items.into_iter().map(ItemDto::from_model).collect())
    }

    /// Deletes an item. Only the owner may delete; the violation is reported
    /// as `NotFound`.
    ///
    /// # Returns
    /// - `Ok(())` - Item deleted
    /// - `Err(AppError::NotFound)` - Item missing or requester is not the owner
    pub async fn delete(&self, item_id: i32, owner_id: i32) -> Result<(), AppError> {
        let repo = ItemRepository::new(self.db);

        let item = repo
            .get_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Item not found".to_string()))?;

        if item.owner_id != owner_id {
            return Err(AppError::NotFound(
                "Only the owner of an item can delete it".to_string(),
            ));
        }

        repo.delete(item.id).await?;

        Ok(())
    }
}
