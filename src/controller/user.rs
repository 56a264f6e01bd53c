use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::user::{CreateUserDto, UpdateUserDto},
    service::user::UserService,
    state::AppState,
};

/// Register a new user.
///
/// # Returns
/// - `201 Created` - Successfully created user
/// - `400 Bad Request` - Blank name or malformed email
/// - `409 Conflict` - Email already in use
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Get all registered users.
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let users = service.get_users().await?;

    Ok((StatusCode::OK, Json(users)))
}

/// Get a user by ID.
pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service.get_user(user_id).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Partially update a user's name and email.
///
/// # Returns
/// - `200 OK` - Successfully updated user
/// - `400 Bad Request` - Blank name or malformed email
/// - `404 Not Found` - User missing
/// - `409 Conflict` - Email already in use by another user
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service.update(user_id, payload).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Delete a user along with their items, bookings and comments.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    service.delete(user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
