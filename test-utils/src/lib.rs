//! ShareIt Test Utils
//!
//! Shared testing utilities for the ShareIt service. This crate offers a builder
//! pattern for creating test contexts with in-memory SQLite databases plus entity
//! factories that cut the boilerplate of wiring users, items, bookings, comments
//! and item requests together in tests.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_booking_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_booking_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
