use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    controller::param::{PaginationParams, SharerUserId},
    error::AppError,
    model::request::CreateRequestDto,
    service::request::RequestService,
    state::AppState,
};

/// Post a new item request.
///
/// # Returns
/// - `201 Created` - Successfully created request
/// - `400 Bad Request` - Blank description
/// - `404 Not Found` - Requester missing
pub async fn create_request(
    State(state): State<AppState>,
    SharerUserId(requester_id): SharerUserId,
    Json(payload): Json<CreateRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = RequestService::new(&state.db);

    let request = service.create(requester_id, payload).await?;

    Ok((StatusCode::CREATED, Json(request)))
}

/// Get the calling user's own requests, newest first, each with the items
/// created to fulfill it.
pub async fn get_own_requests(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
) -> Result<impl IntoResponse, AppError> {
    let service = RequestService::new(&state.db);

    let requests = service.get_own(user_id).await?;

    Ok((StatusCode::OK, Json(requests)))
}

/// Get a page of other users' requests, newest first.
pub async fn get_all_requests(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = RequestService::new(&state.db);

    let requests = service.get_all(user_id, params.from, params.size).await?;

    Ok((StatusCode::OK, Json(requests)))
}

/// Get a request by ID. Visible to any existing user.
pub async fn get_request_by_id(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    Path(request_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = RequestService::new(&state.db);

    let request = service.get_by_id(request_id, user_id).await?;

    Ok((StatusCode::OK, Json(request)))
}
