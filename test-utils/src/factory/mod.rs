//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for
//! customization and a `create_*` convenience function for quick default
//! creation. Factories handle foreign key relationships so tests stay concise.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let item = factory::item::create_item(&db, user.id).await?;
//!
//!     // Create a booking with all dependencies
//!     let (owner, booker, item, booking) =
//!         factory::helpers::create_booking_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let booking = factory::booking::BookingFactory::new(&db, item.id, booker.id)
//!     .start(Utc::now() - Duration::days(2))
//!     .end(Utc::now() - Duration::days(1))
//!     .status("APPROVED")
//!     .build()
//!     .await?;
//! ```

pub mod booking;
pub mod comment;
pub mod helpers;
pub mod item;
pub mod item_request;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use booking::create_booking;
pub use comment::create_comment;
pub use item::create_item;
pub use item_request::create_request;
pub use user::create_user;
