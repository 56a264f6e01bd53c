use axum::{
    routing::{get, patch, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{booking, item, request, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        booking::create_booking,
        booking::decide_booking,
        booking::get_booking_by_id,
        booking::get_bookings_for_booker,
        booking::get_bookings_for_owner,
        item::create_item,
        item::update_item,
        item::get_item_by_id,
        item::get_items_for_owner,
        item::search_items,
        item::post_comment,
        item::delete_item,
    ),
    tags(
        (name = booking::BOOKING_TAG, description = "Booking lifecycle endpoints"),
        (name = item::ITEM_TAG, description = "Item listing and comment endpoints")
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/bookings", post(booking::create_booking).get(booking::get_bookings_for_booker))
        .route("/bookings/owner", get(booking::get_bookings_for_owner))
        .route(
            "/bookings/{booking_id}",
            patch(booking::decide_booking).get(booking::get_booking_by_id),
        )
        .route("/items", post(item::create_item).get(item::get_items_for_owner))
        .route("/items/search", get(item::search_items))
        .route(
            "/items/{item_id}",
            patch(item::update_item)
                .get(item::get_item_by_id)
                .delete(item::delete_item),
        )
        .route("/items/{item_id}/comment", post(item::post_comment))
        .route("/users", post(user::create_user).get(user::get_users))
        .route(
            "/users/{user_id}",
            get(user::get_user_by_id)
                .patch(user::update_user)
                .delete(user::delete_user),
        )
        .route(
            "/requests",
            post(request::create_request).get(request::get_own_requests),
        )
        .route("/requests/all", get(request::get_all_requests))
        .route("/requests/{request_id}", get(request::get_request_by_id))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
