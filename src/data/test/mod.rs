mod booking;
mod comment;
mod item;
mod request;
mod user;
