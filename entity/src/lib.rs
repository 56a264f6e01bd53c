//! SeaORM entity models for the ShareIt domain.
//!
//! Each module defines one database table: users, shareable items, bookings of
//! items, comments left after a completed rental, and item requests that owners
//! can fulfill. The `prelude` re-exports every `Entity` under its domain name.

pub mod booking;
pub mod comment;
pub mod item;
pub mod item_request;
pub mod user;

pub mod prelude {
    pub use super::booking::Entity as Booking;
    pub use super::comment::Entity as Comment;
    pub use super::item::Entity as Item;
    pub use super::item_request::Entity as ItemRequest;
    pub use super::user::Entity as User;
}
