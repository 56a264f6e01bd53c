//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier (names, emails) to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an item together with its owner.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((owner, item))` - The created user and an available item they own
/// - `Err(DbErr)` - Database error during creation
pub async fn create_item_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::item::Model), DbErr> {
    let owner = crate::factory::user::create_user(db).await?;
    let item = crate::factory::item::create_item(db, owner.id).await?;

    Ok((owner, item))
}

/// Creates a complete booking hierarchy with all dependencies.
///
/// This convenience method creates:
/// 1. Owner (user)
/// 2. Booker (user)
/// 3. Item (owned by the owner, available)
/// 4. Booking (by the booker, WAITING, one day in the future)
///
/// All entities are created with default values. Use the individual factories
/// if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((owner, booker, item, booking))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::item::Model,
        entity::booking::Model,
    ),
    DbErr,
> {
    let (owner, item) = create_item_with_owner(db).await?;
    let booker = crate::factory::user::create_user(db).await?;
    let booking = crate::factory::booking::create_booking(db, item.id, booker.id).await?;

    Ok((owner, booker, item, booking))
}
