//! Booking factory for creating test booking entities.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// Bookings default to a WAITING booking one day in the future lasting one day.
/// Use `start`/`end`/`status` to build past or terminal-state bookings for
/// filter and eligibility tests.
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    item_id: i32,
    booker_id: i32,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    status: String,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - start: now + 1 day
    /// - end: now + 2 days
    /// - status: `"WAITING"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `item_id` - ID of the booked item (must exist)
    /// - `booker_id` - ID of the booking user (must exist)
    pub fn new(db: &'a DatabaseConnection, item_id: i32, booker_id: i32) -> Self {
        let now = Utc::now();
        Self {
            db,
            item_id,
            booker_id,
            start: now + Duration::days(1),
            end: now + Duration::days(2),
            status: "WAITING".to_string(),
        }
    }

    /// Sets the booking's start time.
    pub fn start(mut self, start: DateTime<Utc>) -> Self {
        self.start = start;
        self
    }

    /// Sets the booking's end time.
    pub fn end(mut self, end: DateTime<Utc>) -> Self {
        self.end = end;
        self
    }

    /// Sets the booking's status string (WAITING, APPROVED or REJECTED).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Inserts the booking into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created booking
    /// - `Err(DbErr)` - Database error
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            item_id: ActiveValue::Set(self.item_id),
            booker_id: ActiveValue::Set(self.booker_id),
            start: ActiveValue::Set(self.start),
            end: ActiveValue::Set(self.end),
            status: ActiveValue::Set(self.status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a WAITING booking one day in the future with default values.
///
/// # Arguments
/// - `db` - Database connection
/// - `item_id` - ID of the booked item
/// - `booker_id` - ID of the booking user
///
/// # Returns
/// - `Ok(Model)` - The created booking
/// - `Err(DbErr)` - Database error
pub async fn create_booking(
    db: &DatabaseConnection,
    item_id: i32,
    booker_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, item_id, booker_id).build().await
}

/// Creates a completed APPROVED booking, ended one day ago.
///
/// Useful for comment eligibility tests, which require an approved booking
/// whose end time has passed.
///
/// # Arguments
/// - `db` - Database connection
/// - `item_id` - ID of the booked item
/// - `booker_id` - ID of the booking user
///
/// # Returns
/// - `Ok(Model)` - The created booking
/// - `Err(DbErr)` - Database error
pub async fn create_past_approved_booking(
    db: &DatabaseConnection,
    item_id: i32,
    booker_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    let now = Utc::now();
    BookingFactory::new(db, item_id, booker_id)
        .start(now - Duration::days(2))
        .end(now - Duration::days(1))
        .status("APPROVED")
        .build()
        .await
}
