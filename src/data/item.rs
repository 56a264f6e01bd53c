//! Item data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

/// Repository providing database operations for shareable items.
pub struct ItemRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemRepository<'a> {
    /// Creates a new ItemRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new item.
    ///
    /// # Arguments
    /// - `owner_id` - ID of the owning user
    /// - `name` - Item name
    /// - `description` - Item description
    /// - `available` - Whether the item may currently be booked
    /// - `request_id` - Request this item fulfills, if any
    ///
    /// # Returns
    /// - `Ok(Model)` - The created item
    /// - `Err(DbErr)` - Database error
    pub async fn create(
        &self,
        owner_id: i32,
        name: String,
        description: String,
        available: bool,
        request_id: Option<i32>,
    ) -> Result<entity::item::Model, DbErr> {
        entity::item::ActiveModel {
            owner_id: ActiveValue::Set(owner_id),
            name: ActiveValue::Set(name),
            description: ActiveValue::Set(description),
            available: ActiveValue::Set(available),
            request_id: ActiveValue::Set(request_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets an item by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The item
    /// - `Ok(None)` - Item not found
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::item::Model>, DbErr> {
        entity::prelude::Item::find_by_id(id).one(self.db).await
    }

    /// Gets all items with the given IDs, for batch-resolving references.
    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<entity::item::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Item::find()
            .filter(entity::item::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }

    /// Updates an item's mutable fields.
    ///
    /// The caller resolves partial updates; this method always writes all
    /// three fields.
    ///
    /// # Arguments
    /// - `item` - The item to update, as currently persisted
    /// - `name` - New item name
    /// - `description` - New description
    /// - `available` - New availability flag
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated item
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        item: entity::item::Model,
        name: String,
        description: String,
        available: bool,
    ) -> Result<entity::item::Model, DbErr> {
        let mut active: entity::item::ActiveModel = item.into();
        active.name = ActiveValue::Set(name);
        active.description = ActiveValue::Set(description);
        active.available = ActiveValue::Set(available);

        active.update(self.db).await
    }

    /// Gets a page of a user's items, ordered by ID.
    ///
    /// # Arguments
    /// - `owner_id` - ID of the owning user
    /// - `offset` - Number of items to skip
    /// - `limit` - Maximum number of items to return
    pub async fn get_by_owner(
        &self,
        owner_id: i32,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<entity::item::Model>, DbErr> {
        entity::prelude::Item::find()
            .filter(entity::item::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::item::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Searches available items whose name or description contains the text.
    ///
    /// Matching is case-insensitive (SQLite `LIKE` semantics on the lowercased
    /// search text). Only available items are returned. Callers handle the
    /// blank-text case; this method assumes a non-empty needle.
    ///
    /// # Arguments
    /// - `text` - Lowercased search text
    /// - `offset` - Number of items to skip
    /// - `limit` - Maximum number of items to return
    pub async fn search(
        &self,
        text: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<entity::item::Model>, DbErr> {
        entity::prelude::Item::find()
            .filter(entity::item::Column::Available.eq(true))
            .filter(
                Condition::any()
                    .add(entity::item::Column::Name.contains(text))
                    .add(entity::item::Column::Description.contains(text)),
            )
            .order_by_asc(entity::item::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Gets all items created to fulfill the given request.
    pub async fn find_by_request(
        &self,
        request_id: i32,
    ) -> Result<Vec<entity::item::Model>, DbErr> {
        entity::prelude::Item::find()
            .filter(entity::item::Column::RequestId.eq(request_id))
            .all(self.db)
            .await
    }

    /// Gets all items fulfilling any of the given requests, for batch-building
    /// request listings.
    pub async fn find_by_requests(
        &self,
        request_ids: Vec<i32>,
    ) -> Result<Vec<entity::item::Model>, DbErr> {
        if request_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Item::find()
            .filter(entity::item::Column::RequestId.is_in(request_ids))
            .all(self.db)
            .await
    }

    /// Deletes an item by ID.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 when the item did not exist)
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Item::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
