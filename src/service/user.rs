//! User service.
//!
//! CRUD for users, with email uniqueness surfaced as a 409 conflict and
//! partial updates expressed through an explicit optional-field struct.

use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserDto, UpdateUserDto, UserDto},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all users ordered by ID.
    pub async fn get_users(&self) -> Result<Vec<UserDto>, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Gets a user by ID.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The user
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn get_user(&self, user_id: i32) -> Result<UserDto, AppError> {
        let user = UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with ID={} not found", user_id)))?;

        Ok(user.into())
    }

    /// Creates a new user.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user
    /// - `Err(AppError::Validation)` - Blank name or malformed email
    /// - `Err(AppError::Conflict)` - Email already in use
    pub async fn create(&self, dto: CreateUserDto) -> Result<UserDto, AppError> {
        Self::validate_name(&dto.name)?;
        Self::validate_email(&dto.email)?;

        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&dto.email).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Email {} is already in use",
                dto.email
            )));
        }

        let user = repo.create(dto.name, dto.email).await?;

        Ok(user.into())
    }

    /// Partially updates a user's name and/or email.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::Validation)` - Blank name or malformed email
    /// - `Err(AppError::Conflict)` - Email already used by another user
    pub async fn update(&self, user_id: i32, dto: UpdateUserDto) -> Result<UserDto, AppError> {
        let repo = UserRepository::new(self.db);

        let user = repo
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with ID={} not found", user_id)))?;

        if let Some(ref name) = dto.name {
            Self::validate_name(name)?;
        }
        if let Some(ref email) = dto.email {
            Self::validate_email(email)?;

            if let Some(existing) = repo.find_by_email(email).await? {
                if existing.id != user.id {
                    return Err(AppError::Conflict(format!(
                        "Email {} is already in use",
                        email
                    )));
                }
            }
        }

        let name = dto.name.unwrap_or_else(|| user.name.clone());
        let email = dto.email.unwrap_or_else(|| user.email.clone());

        let updated = repo.update(user, name, email).await?;

        Ok(updated.into())
    }

    /// Deletes a user by ID. The user's items and bookings are removed by the
    /// database's cascading foreign keys.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn delete(&self, user_id: i32) -> Result<(), AppError> {
        let deleted = UserRepository::new(self.db).delete(user_id).await?;

        if deleted == 0 {
            return Err(AppError::NotFound(format!(
                "User with ID={} not found",
                user_id
            )));
        }

        Ok(())
    }

    fn validate_name(name: &str) -> Result<(), AppError> {
        if name.trim().is_empty() {
            return Err(AppError::Validation(
                "User name must not be blank".to_string(),
            ));
        }

        Ok(())
    }

    /// Minimal syntactic email check: non-blank with an '@' separating two
    /// non-empty halves. Full RFC validation is out of scope.
    fn validate_email(email: &str) -> Result<(), AppError> {
        let valid = match email.split_once('@') {
            Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
            None => false,
        };

        if !valid {
            return Err(AppError::Validation(format!(
                "Invalid email address: {}",
                email
            )));
        }

        Ok(())
    }
}
