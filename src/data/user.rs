//! User data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `name` - Display name
    /// - `email` - Email address; the column carries a unique constraint
    ///
    /// # Returns
    /// - `Ok(Model)` - The created user
    /// - `Err(DbErr)` - Database error, including unique violations
    pub async fn create(&self, name: String, email: String) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            name: ActiveValue::Set(name),
            email: ActiveValue::Set(email),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The user
    /// - `Ok(None)` - User not found
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Gets all users ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets all users with the given IDs, for batch-resolving references.
    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<entity::user::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }

    /// Finds a user by exact email address.
    ///
    /// Used to detect duplicate emails before insert/update rather than
    /// surfacing the raw unique-constraint error.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Updates a user's name and email.
    ///
    /// The caller resolves partial updates; this method always writes both
    /// fields.
    ///
    /// # Arguments
    /// - `user` - The user to update, as currently persisted
    /// - `name` - New display name
    /// - `email` - New email address
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated user
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        user: entity::user::Model,
        name: String,
        email: String,
    ) -> Result<entity::user::Model, DbErr> {
        let mut active: entity::user::ActiveModel = user.into();
        active.name = ActiveValue::Set(name);
        active.email = ActiveValue::Set(email);

        active.update(self.db).await
    }

    /// Deletes a user by ID.
    ///
    /// Items, bookings and comments referencing the user are removed by the
    /// database's cascading foreign keys.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 when the user did not exist)
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
