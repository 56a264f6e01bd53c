//! Booking lifecycle service.
//!
//! Enforces the booking state machine: a booking is created WAITING by a
//! non-owner on an available item and moved exactly once to APPROVED or
//! REJECTED by the item's owner. Listing endpoints filter by a typed state
//! against a single `now` captured per call.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::{
    data::{booking::BookingRepository, item::ItemRepository, user::UserRepository},
    error::AppError,
    model::booking::{BookedItemDto, BookingDto, BookingStatus, CreateBookingDto, StateFilter},
    model::user::UserDto,
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new WAITING booking for an item.
    ///
    /// Preconditions, checked in order: the booker and the item exist, the
    /// item is available, the time window is well-formed and does not start in
    /// the past, and the booker is not the item's owner. The ownership
    /// violation is deliberately reported as `NotFound` rather than a
    /// permission error.
    ///
    /// # Arguments
    /// - `booker_id` - ID of the requesting user
    /// - `dto` - Requested item and time window
    ///
    /// # Returns
    /// - `Ok(BookingDto)` - The created booking, status WAITING
    /// - `Err(AppError)` - `NotFound` or `Validation` per the rules above
    pub async fn create(
        &self,
        booker_id: i32,
        dto: CreateBookingDto,
    ) -> Result<BookingDto, AppError> {
        let booker = UserRepository::new(self.db)
            .get_by_id(booker_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let item = ItemRepository::new(self.db)
            .get_by_id(dto.item_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Item not found".to_string()))?;

        if !item.available {
            return Err(AppError::Validation("Item is not available".to_string()));
        }

        if dto.end <= dto.start {
            return Err(AppError::Validation(
                "Booking end must be after its start".to_string(),
            ));
        }

        if dto.start < Utc::now() {
            return Err(AppError::Validation(
                "Booking start must not be in the past".to_string(),
            ));
        }

        if booker.id == item.owner_id {
            return Err(AppError::NotFound("Owner can't book this item".to_string()));
        }

        let booking = BookingRepository::new(self.db)
            .create(item.id, booker.id, dto.start, dto.end)
            .await?;

        Self::to_dto(booking, &item, &booker)
    }

    /// Approves or rejects a WAITING booking.
    ///
    /// Only the item's owner may decide, and a booking can be decided exactly
    /// once: any further decision attempt is a validation failure, whether it
    /// repeats the stored state or tries to flip it.
    ///
    /// # Arguments
    /// - `booking_id` - ID of the booking to decide
    /// - `owner_id` - ID of the user making the decision
    /// - `approved` - `true` to approve, `false` to reject
    ///
    /// # Returns
    /// - `Ok(BookingDto)` - The booking with its terminal status
    /// - `Err(AppError::NotFound)` - Booking missing, or `owner_id` does not
    ///   own the item
    /// - `Err(AppError::Validation)` - Booking already decided
    pub async fn decide(
        &self,
        booking_id: i32,
        owner_id: i32,
        approved: bool,
    ) -> Result<BookingDto, AppError> {
        let repo = BookingRepository::new(self.db);

        let booking = repo.get_by_id(booking_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Booking with ID={} not found", booking_id))
        })?;

        let item = ItemRepository::new(self.db)
            .get_by_id(booking.item_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Item not found".to_string()))?;

        if owner_id != item.owner_id {
            return Err(AppError::NotFound(
                "Status of booking cannot be updated because user is not the owner of item"
                    .to_string(),
            ));
        }

        let status = BookingStatus::from_db(&booking.status)?;
        let target = if approved {
            BookingStatus::Approved
        } else {
            BookingStatus::Rejected
        };

        if status != BookingStatus::Waiting {
            let message = match (status, target) {
                (BookingStatus::Approved, BookingStatus::Approved) => {
                    "Cannot approve already approved Booking".to_string()
                }
                (BookingStatus::Rejected, BookingStatus::Rejected) => {
                    "Cannot reject already rejected Booking".to_string()
                }
                _ => "Booking has already been decided".to_string(),
            };
            return Err(AppError::Validation(message));
        }

        let booker = UserRepository::new(self.db)
            .get_by_id(booking.booker_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let updated = repo.set_status(booking, target).await?;

        Self::to_dto(updated, &item, &booker)
    }

    /// Gets a booking by ID, visible only to its booker or the item's owner.
    ///
    /// # Arguments
    /// - `booking_id` - ID of the booking
    /// - `user_id` - ID of the requesting user
    ///
    /// # Returns
    /// - `Ok(BookingDto)` - The booking
    /// - `Err(AppError::NotFound)` - Booking missing, or the requester is
    ///   neither booker nor owner
    pub async fn get_by_id(&self, booking_id: i32, user_id: i32) -> Result<BookingDto, AppError> {
        let booking = BookingRepository::new(self.db)
            .get_by_id(booking_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Booking with ID={} not found", booking_id))
            })?;

        let item = ItemRepository::new(self.db)
            .get_by_id(booking.item_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Item not found".to_string()))?;

        if user_id != booking.booker_id && user_id != item.owner_id {
            return Err(AppError::NotFound(
                "Only owner or booker of a Booking can request data about it".to_string(),
            ));
        }

        let booker = UserRepository::new(self.db)
            .get_by_id(booking.booker_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Self::to_dto(booking, &item, &booker)
    }

    /// Lists a user's own bookings filtered by state, newest start first.
    ///
    /// # Arguments
    /// - `booker_id` - ID of the booking user, who must exist
    /// - `state` - Optional state filter string; missing means ALL
    /// - `from` - Number of bookings to skip (must be non-negative)
    /// - `size` - Page size (must be positive)
    ///
    /// # Returns
    /// - `Ok(Vec<BookingDto>)` - The matching page
    /// - `Err(AppError)` - Unknown state string, invalid pagination, or
    ///   missing user
    pub async fn list_for_booker(
        &self,
        booker_id: i32,
        state: Option<&str>,
        from: i64,
        size: i64,
    ) -> Result<Vec<BookingDto>, AppError> {
        let filter = StateFilter::parse(state)?;
        let (offset, limit) = super::to_page(from, size)?;
        self.require_user(booker_id).await?;

        let now = Utc::now();
        let bookings = BookingRepository::new(self.db)
            .find_for_booker(booker_id, filter, now, offset, limit)
            .await?;

        self.to_dtos(bookings).await
    }

    /// Lists the bookings of all items a user owns, filtered by state, newest
    /// start first.
    ///
    /// Same contract as [`Self::list_for_booker`], with the subject user being
    /// the items' owner.
    pub async fn list_for_owner(
        &self,
        owner_id: i32,
        state: Option<&str>,
        from: i64,
        size: i64,
    ) -> Result<Vec<BookingDto>, AppError> {
        let filter = StateFilter::parse(state)?;
        let (offset, limit) = super::to_page(from, size)?;
        self.require_user(owner_id).await?;

        let now = Utc::now();
        let bookings = BookingRepository::new(self.db)
            .find_for_owner(owner_id, filter, now, offset, limit)
            .await?;

        self.to_dtos(bookings).await
    }

    async fn require_user(&self, user_id: i32) -> Result<entity::user::Model, AppError> {
        UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Maps a page of bookings to DTOs, batch-resolving the referenced items
    /// and bookers.
    async fn to_dtos(
        &self,
        bookings: Vec<entity::booking::Model>,
    ) -> Result<Vec<BookingDto>, AppError> {
        let item_ids: Vec<i32> = bookings.iter().map(|b| b.item_id).collect();
        let booker_ids: Vec<i32> = bookings.iter().map(|b| b.booker_id).collect();

        let items: HashMap<i32, entity::item::Model> = ItemRepository::new(self.db)
            .find_by_ids(item_ids)
            .await?
            .into_iter()
            .map(|i| (i.id, i))
            .collect();
        let bookers: HashMap<i32, entity::user::Model> = UserRepository::new(self.db)
            .find_by_ids(booker_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        bookings
            .into_iter()
            .map(|booking| {
                let item = items.get(&booking.item_id).ok_or_else(|| {
                    AppError::InternalError(format!(
                        "Booking {} references missing item {}",
                        booking.id, booking.item_id
                    ))
                })?;
                let booker = bookers.get(&booking.booker_id).ok_or_else(|| {
                    AppError::InternalError(format!(
                        "Booking {} references missing user {}",
                        booking.id, booking.booker_id
                    ))
                })?;
                Self::to_dto(booking, item, booker)
            })
            .collect()
    }

    fn to_dto(
        booking: entity::booking::Model,
        item: &entity::item::Model,
        booker: &entity::user::Model,
    ) -> Result<BookingDto, AppError> {
        Ok(BookingDto {
            id: booking.id,
            start: booking.start,
            end: booking.end,
            status: BookingStatus::from_db(&booking.status)?,
            booker: UserDto {
                id: booker.id,
                name: booker.name.clone(),
                email: booker.email.clone(),
            },
            item: BookedItemDto {
                id: item.id,
                name: item.name.clone(),
            },
        })
    }
}
