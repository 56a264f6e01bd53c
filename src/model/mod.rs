//! Wire DTOs for the HTTP API.
//!
//! These types are what the controllers accept and return as JSON. Fields use
//! camelCase on the wire. Partial updates are expressed with explicit
//! optional-field structs so the set of updatable fields is statically known.

pub mod api;
pub mod booking;
pub mod item;
pub mod request;
pub mod user;
