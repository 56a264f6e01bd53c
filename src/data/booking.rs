//! Booking data repository for database operations.
//!
//! Listing queries take a typed `StateFilter` plus the `now` timestamp captured
//! by the service, so every temporal filter in one call is evaluated against
//! the same instant.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};

use crate::model::booking::{BookingStatus, StateFilter};

/// Repository providing database operations for bookings.
pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    /// Creates a new BookingRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new booking in WAITING state.
    ///
    /// # Arguments
    /// - `item_id` - ID of the booked item
    /// - `booker_id` - ID of the booking user
    /// - `start` - Start of the booking window
    /// - `end` - End of the booking window
    ///
    /// # Returns
    /// - `Ok(Model)` - The created booking
    /// - `Err(DbErr)` - Database error
    pub async fn create(
        &self,
        item_id: i32,
        booker_id: i32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            item_id: ActiveValue::Set(item_id),
            booker_id: ActiveValue::Set(booker_id),
            start: ActiveValue::Set(start),
            end: ActiveValue::Set(end),
            status: ActiveValue::Set(BookingStatus::Waiting.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a booking by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The booking
    /// - `Ok(None)` - Booking not found
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find_by_id(id).one(self.db).await
    }

    /// Sets a booking's status.
    ///
    /// The service enforces the WAITING → APPROVED/REJECTED state machine
    /// before calling this.
    ///
    /// # Arguments
    /// - `booking` - The booking to update, as currently persisted
    /// - `status` - The terminal status to store
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated booking
    /// - `Err(DbErr)` - Database error
    pub async fn set_status(
        &self,
        booking: entity::booking::Model,
        status: BookingStatus,
    ) -> Result<entity::booking::Model, DbErr> {
        let mut active: entity::booking::ActiveModel = booking.into();
        active.status = ActiveValue::Set(status.as_str().to_string());

        active.update(self.db).await
    }

    /// Gets a page of a user's own bookings matching the state filter,
    /// ordered by start time descending.
    ///
    /// # Arguments
    /// - `booker_id` - ID of the booking user
    /// - `filter` - State filter to apply
    /// - `now` - The instant CURRENT/PAST/FUTURE are evaluated against
    /// - `offset` - Number of bookings to skip
    /// - `limit` - Maximum number of bookings to return
    pub async fn find_for_booker(
        &self,
        booker_id: i32,
        filter: StateFilter,
        now: DateTime<Utc>,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        let query = entity::prelude::Booking::find()
            .filter(entity::booking::Column::BookerId.eq(booker_id));

        Self::apply_state_filter(query, filter, now)
            .order_by_desc(entity::booking::Column::Start)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Gets a page of the bookings of all items owned by a user, matching the
    /// state filter, ordered by start time descending.
    ///
    /// # Arguments
    /// - `owner_id` - ID of the items' owner
    /// - `filter` - State filter to apply
    /// - `now` - The instant CURRENT/PAST/FUTURE are evaluated against
    /// - `offset` - Number of bookings to skip
    /// - `limit` - Maximum number of bookings to return
    pub async fn find_for_owner(
        &self,
        owner_id: i32,
        filter: StateFilter,
        now: DateTime<Utc>,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        let query = entity::prelude::Booking::find()
            .join(JoinType::InnerJoin, entity::booking::Relation::Item.def())
            .filter(entity::item::Column::OwnerId.eq(owner_id));

        Self::apply_state_filter(query, filter, now)
            .order_by_desc(entity::booking::Column::Start)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Gets all bookings of one item.
    ///
    /// Used for the availability snapshot and the comment eligibility check,
    /// both of which evaluate the full booking history in memory.
    pub async fn find_by_item(&self, item_id: i32) -> Result<Vec<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::ItemId.eq(item_id))
            .all(self.db)
            .await
    }

    /// Gets all bookings of any of the given items, for batch-building the
    /// owner's item listing.
    pub async fn find_by_items(
        &self,
        item_ids: Vec<i32>,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Booking::find()
            .filter(entity::booking::Column::ItemId.is_in(item_ids))
            .all(self.db)
            .await
    }

    /// Applies the state filter to a booking query.
    ///
    /// CURRENT keeps bookings with `start <= now < end`, PAST those with
    /// `end < now`, FUTURE those with `start > now`; WAITING and REJECTED
    /// match the stored status and ALL keeps everything.
    fn apply_state_filter(
        query: Select<entity::prelude::Booking>,
        filter: StateFilter,
        now: DateTime<Utc>,
    ) -> Select<entity::prelude::Booking> {
        match filter {
            StateFilter::All => query,
            StateFilter::Current => query
                .filter(entity::booking::Column::Start.lte(now))
                .filter(entity::booking::Column::End.gt(now)),
            StateFilter::Past => query.filter(entity::booking::Column::End.lt(now)),
            StateFilter::Future => query.filter(entity::booking::Column::Start.gt(now)),
            StateFilter::Waiting => {
                query.filter(entity::booking::Column::Status.eq(BookingStatus::Waiting.as_str()))
            }
            StateFilter::Rejected => {
                query.filter(entity::booking::Column::Status.eq(BookingStatus::Rejected.as_str()))
            }
        }
    }
}
