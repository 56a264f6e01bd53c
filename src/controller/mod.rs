pub mod booking;
pub mod item;
pub mod param;
pub mod request;
pub mod user;
