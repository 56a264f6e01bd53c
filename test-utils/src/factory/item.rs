//! Item factory for creating test item entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test items with customizable fields.
///
/// Items default to being available with a generated name and description.
pub struct ItemFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    name: String,
    description: String,
    available: bool,
    request_id: Option<i32>,
}

impl<'a> ItemFactory<'a> {
    /// Creates a new ItemFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Item {id}"` where id is auto-incremented
    /// - description: `"Description {id}"`
    /// - available: `true`
    /// - request_id: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `owner_id` - ID of the user owning the item (must exist)
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id,
            name: format!("Item {}", id),
            description: format!("Description {}", id),
            available: true,
            request_id: None,
        }
    }

    /// Sets the item's name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the item's description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the item's availability flag.
    pub fn available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Links the item to the request it fulfills.
    pub fn request_id(mut self, request_id: i32) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Inserts the item into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created item
    /// - `Err(DbErr)` - Database error
    pub async fn build(self) -> Result<entity::item::Model, DbErr> {
        entity::item::ActiveModel {
            owner_id: ActiveValue::Set(self.owner_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            available: ActiveValue::Set(self.available),
            request_id: ActiveValue::Set(self.request_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available item with default values.
///
/// # Arguments
/// - `db` - Database connection
/// - `owner_id` - ID of the owning user
///
/// # Returns
/// - `Ok(Model)` - The created item
/// - `Err(DbErr)` - Database error
pub async fn create_item(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::item::Model, DbErr> {
    ItemFactory::new(db, owner_id).build().await
}
