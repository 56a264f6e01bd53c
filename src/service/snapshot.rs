//! Item availability snapshot.
//!
//! Computes the owner-facing "last" and "next" booking summaries attached to an
//! item view. These are pure projections over an already-fetched booking list;
//! no persistence access happens here, and both are evaluated against the one
//! `now` the caller captured.

use chrono::{DateTime, Utc};

use crate::model::{booking::BookingStatus, item::BookingSummaryDto};

/// Picks the upcoming booking: among bookings with `start > now` that are
/// WAITING or APPROVED, the one with the minimum start time.
///
/// # Arguments
/// - `bookings` - The item's full booking list
/// - `now` - The instant the snapshot is taken at
///
/// # Returns
/// - `Some(BookingSummaryDto)` - The next booking
/// - `None` - No pending or approved booking lies in the future
pub fn next_booking(
    bookings: &[entity::booking::Model],
    now: DateTime<Utc>,
) -> Option<BookingSummaryDto> {
    bookings
        .iter()
        .filter(|b| b.start > now)
        .filter(|b| {
            b.status == BookingStatus::Waiting.as_str()
                || b.status == BookingStatus::Approved.as_str()
        })
        .min_by_key(|b| b.start)
        .map(to_summary)
}

/// Picks the most recent booking: among APPROVED bookings that have ended
/// (`end < now`) or are currently active (`start < now <= end`), the one with
/// the maximum start time.
///
/// # Arguments
/// - `bookings` - The item's full booking list
/// - `now` - The instant the snapshot is taken at
///
/// # Returns
/// - `Some(BookingSummaryDto)` - The last booking
/// - `None` - No approved booking has started yet
pub fn last_booking(
    bookings: &[entity::booking::Model],
    now: DateTime<Utc>,
) -> Option<BookingSummaryDto> {
    bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Approved.as_str())
        .filter(|b| b.end < now || (b.start < now && now <= b.end))
        .max_by_key(|b| b.start)
        .map(to_summary)
}

fn to_summary(booking: &entity::booking::Model) -> BookingSummaryDto {
    BookingSummaryDto {
        id: booking.id,
        booker_id: booking.booker_id,
    }
}
