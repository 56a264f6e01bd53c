use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    controller::param::{PaginationParams, SearchParams, SharerUserId},
    error::AppError,
    model::{
        api::ErrorDto,
        item::{CommentDto, CreateCommentDto, CreateItemDto, ItemDto, UpdateItemDto},
    },
    service::{comment::CommentService, item::ItemService},
    state::AppState,
};

/// Tag for grouping item endpoints in OpenAPI documentation
pub static ITEM_TAG: &str = "item";

/// Create a new item.
///
/// Lists a new item for sharing on behalf of the calling user. Availability
/// must be stated explicitly. An item may reference the request it fulfills.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `owner_id` - Calling user's ID from the `X-Sharer-User-Id` header
/// - `payload` - Item data (name, description, availability, optional request ID)
///
/// # Returns
/// - `201 Created` - Successfully created item
/// - `400 Bad Request` - Blank name or description, or availability missing
/// - `404 Not Found` - Owner or referenced request missing
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/items",
    tag = ITEM_TAG,
    request_body = CreateItemDto,
    responses(
        (status = 201, description = "Successfully created item", body = ItemDto),
        (status = 400, description = "Invalid item data", body = ErrorDto),
        (status = 404, description = "Owner or request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_item(
    State(state): State<AppState>,
    SharerUserId(owner_id): SharerUserId,
    Json(payload): Json<CreateItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ItemService::new(&state.db);

    let item = service.create(owner_id, payload).await?;

    Ok((StatusCode::CREATED, Json(item)))
}

/// Update an item.
///
/// Partially updates an item's name, description or availability. Only the
/// owner can update; anyone else gets `404 Not Found`.
///
/// # Returns
/// - `200 OK` - Successfully updated item
/// - `404 Not Found` - Item missing or caller is not the owner
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/items/{item_id}",
    tag = ITEM_TAG,
    params(
        ("item_id" = i32, Path, description = "Item ID")
    ),
    request_body = UpdateItemDto,
    responses(
        (status = 200, description = "Successfully updated item", body = ItemDto),
        (status = 404, description = "Item not found or caller is not the owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_item(
    State(state): State<AppState>,
    SharerUserId(owner_id): SharerUserId,
    Path(item_id): Path<i32>,
    Json(payload): Json<UpdateItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ItemService::new(&state.db);

    let item = service.update(item_id, owner_id, payload).await?;

    Ok((StatusCode::OK, Json(item)))
}

/// Get an item by ID.
///
/// Returns the item with its comments. The booking snapshot (last and next
/// booking) is attached only when the caller is the item's owner.
///
/// # Returns
/// - `200 OK` - Item details
/// - `404 Not Found` - Item missing
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/items/{item_id}",
    tag = ITEM_TAG,
    params(
        ("item_id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved item", body = ItemDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_item_by_id(
    State(state): State<AppState>,
    SharerUserId(viewer_id): SharerUserId,
    Path(item_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ItemService::new(&state.db);

    let item = service.get_by_id(item_id, viewer_id).await?;

    Ok((StatusCode::OK, Json(item)))
}

/// Get the calling user's items.
///
/// Returns a page of the caller's items ordered by ID, each with its booking
/// snapshot and comments.
///
/// # Returns
/// - `200 OK` - List of the caller's items
/// - `400 Bad Request` - Invalid pagination
/// - `404 Not Found` - Caller does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/items",
    tag = ITEM_TAG,
    params(
        ("from" = Option<i64>, Query, description = "Number of items to skip (default: 0)"),
        ("size" = Option<i64>, Query, description = "Page size (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved items", body = Vec<ItemDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_items_for_owner(
    State(state): State<AppState>,
    SharerUserId(owner_id): SharerUserId,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = ItemService::new(&state.db);

    let items = service.get_for_owner(owner_id, params.from, params.size).await?;

    Ok((StatusCode::OK, Json(items)))
}

/// Search available items by text.
///
/// Case-insensitive match against item names and descriptions, restricted to
/// available items. Blank search text returns an empty list.
///
/// # Returns
/// - `200 OK` - List of matching items
/// - `400 Bad Request` - Invalid pagination
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/items/search",
    tag = ITEM_TAG,
    params(
        ("text" = String, Query, description = "Search text"),
        ("from" = Option<i64>, Query, description = "Number of items to skip (default: 0)"),
        ("size" = Option<i64>, Query, description = "Page size (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully searched items", body = Vec<ItemDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_items(
    State(state): State<AppState>,
    Query(search): Query<SearchParams>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = ItemService::new(&state.db);

    let items = service.search(&search.text, params.from, params.size).await?;

    Ok((StatusCode::OK, Json(items)))
}

/// Post a comment on an item.
///
/// A user may comment only after at least one of their APPROVED bookings of
/// the item has finished.
///
/// # Returns
/// - `201 Created` - Successfully posted comment
/// - `400 Bad Request` - Blank text or no completed booking
/// - `404 Not Found` - Author or item missing
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/items/{item_id}/comment",
    tag = ITEM_TAG,
    params(
        ("item_id" = i32, Path, description = "Item ID")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Successfully posted comment", body = CommentDto),
        (status = 400, description = "Blank text or no completed booking", body = ErrorDto),
        (status = 404, description = "Author or item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn post_comment(
    State(state): State<AppState>,
    SharerUserId(author_id): SharerUserId,
    Path(item_id): Path<i32>,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CommentService::new(&state.db);

    let comment = service.post_comment(item_id, author_id, payload).await?;

    Ok((StatusCode::CREATED, Json(comment)))
}

/// Delete an item.
///
/// Only the owner can delete; anyone else gets `404 Not Found`.
///
/// # Returns
/// - `204 No Content` - Successfully deleted item
/// - `404 Not Found` - Item missing or caller is not the owner
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/items/{item_id}",
    tag = ITEM_TAG,
    params(
        ("item_id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted item"),
        (status = 404, description = "Item not found or caller is not the owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_item(
    State(state): State<AppState>,
    SharerUserId(owner_id): SharerUserId,
    Path(item_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ItemService::new(&state.db);

    service.delete(item_id, owner_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
