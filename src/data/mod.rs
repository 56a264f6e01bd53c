//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations
//! (CRUD and filtered queries) for each domain in the application. Repositories
//! use SeaORM entity models and expose typed filter parameters instead of
//! encoding filters in method-name conventions. All database access in the
//! service layer goes through these repositories.

pub mod booking;
pub mod comment;
pub mod item;
pub mod request;
pub mod user;

#[cfg(test)]
mod test;
