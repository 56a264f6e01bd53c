use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    controller::param::{BookingListParams, DecisionParams, SharerUserId},
    error::AppError,
    model::{
        api::ErrorDto,
        booking::{BookingDto, CreateBookingDto},
    },
    service::booking::BookingService,
    state::AppState,
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// Create a new booking.
///
/// Books an item for the requested time window. The booking starts out in the
/// WAITING state until the item's owner approves or rejects it. The item must
/// exist and be available, the window must be a valid future interval, and
/// owners cannot book their own items.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `booker_id` - Calling user's ID from the `X-Sharer-User-Id` header
/// - `payload` - Booking data (item ID, start, end)
///
/// # Returns
/// - `201 Created` - Successfully created booking in WAITING state
/// - `400 Bad Request` - Item unavailable or invalid time window
/// - `404 Not Found` - Booker or item missing, or booker owns the item
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Successfully created booking", body = BookingDto),
        (status = 400, description = "Item unavailable or invalid time window", body = ErrorDto),
        (status = 404, description = "Booker or item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    SharerUserId(booker_id): SharerUserId,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db);

    let booking = service.create(booker_id, payload).await?;

    Ok((StatusCode::CREATED, Json(booking)))
}

/// Approve or reject a waiting booking.
///
/// Only the owner of the booked item can decide. A booking can be decided
/// exactly once; the decision is final.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `owner_id` - Calling user's ID from the `X-Sharer-User-Id` header
/// - `booking_id` - Booking ID to decide
/// - `params` - `approved=true` to approve, `approved=false` to reject
///
/// # Returns
/// - `200 OK` - Booking moved to APPROVED or REJECTED
/// - `400 Bad Request` - Booking already decided
/// - `404 Not Found` - Booking missing or caller is not the item's owner
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/bookings/{booking_id}",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking ID"),
        ("approved" = bool, Query, description = "true to approve, false to reject")
    ),
    responses(
        (status = 200, description = "Successfully decided booking", body = BookingDto),
        (status = 400, description = "Booking already decided", body = ErrorDto),
        (status = 404, description = "Booking not found or caller is not the owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn decide_booking(
    State(state): State<AppState>,
    SharerUserId(owner_id): SharerUserId,
    Path(booking_id): Path<i32>,
    Query(params): Query<DecisionParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db);

    let booking = service.decide(booking_id, owner_id, params.approved).await?;

    Ok((StatusCode::OK, Json(booking)))
}

/// Get a booking by ID.
///
/// Only the booker and the owner of the booked item can see a booking; everyone
/// else gets `404 Not Found`.
///
/// # Returns
/// - `200 OK` - Booking details
/// - `404 Not Found` - Booking missing or caller is neither booker nor owner
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/bookings/{booking_id}",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved booking", body = BookingDto),
        (status = 404, description = "Booking not found or not visible to the caller", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking_by_id(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    Path(booking_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db);

    let booking = service.get_by_id(booking_id, user_id).await?;

    Ok((StatusCode::OK, Json(booking)))
}

/// Get the calling user's bookings, filtered by state.
///
/// Returns bookings made by the caller, newest start first. The `state`
/// parameter narrows the list to a lifecycle view: ALL (default), CURRENT,
/// PAST, FUTURE, WAITING or REJECTED.
///
/// # Returns
/// - `200 OK` - List of bookings
/// - `400 Bad Request` - Unknown state value or invalid pagination
/// - `404 Not Found` - Caller does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/bookings",
    tag = BOOKING_TAG,
    params(
        ("state" = Option<String>, Query, description = "State filter (default: ALL)"),
        ("from" = Option<i64>, Query, description = "Number of bookings to skip (default: 0)"),
        ("size" = Option<i64>, Query, description = "Page size (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved bookings", body = Vec<BookingDto>),
        (status = 400, description = "Unknown state or invalid pagination", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bookings_for_booker(
    State(state): State<AppState>,
    SharerUserId(booker_id): SharerUserId,
    Query(params): Query<BookingListParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db);

    let bookings = service
        .list_for_booker(booker_id, params.state.as_deref(), params.from, params.size)
        .await?;

    Ok((StatusCode::OK, Json(bookings)))
}

/// Get bookings of the calling user's items, filtered by state.
///
/// Returns bookings of all items the caller owns, newest start first, with the
/// same `state` filter as the booker-side listing.
///
/// # Returns
/// - `200 OK` - List of bookings
/// - `400 Bad Request` - Unknown state value or invalid pagination
/// - `404 Not Found` - Caller does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/bookings/owner",
    tag = BOOKING_TAG,
    params(
        ("state" = Option<String>, Query, description = "State filter (default: ALL)"),
        ("from" = Option<i64>, Query, description = "Number of bookings to skip (default: 0)"),
        ("size" = Option<i64>, Query, description = "Page size (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved bookings", body = Vec<BookingDto>),
        (status = 400, description = "Unknown state or invalid pagination", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bookings_for_owner(
    State(state): State<AppState>,
    SharerUserId(owner_id): SharerUserId,
    Query(params): Query<BookingListParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db);

    let bookings = service
        .list_for_owner(owner_id, params.state.as_deref(), params.from, params.size)
        .await?;

    Ok((StatusCode::OK, Json(bookings)))
}
