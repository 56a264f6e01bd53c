use super::*;

/// Tests creating a booking.
///
/// Verifies that new bookings start out WAITING with the requested window.
///
/// Expected: Ok with a WAITING booking
#[tokio::test]
async fn creates_waiting_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, item) = factory::helpers::create_item_with_owner(db).await?;
    let booker = factory::create_user(db).await?;

    let start = Utc::now() + Duration::days(1);
    let end = Utc::now() + Duration::days(2);

    let booking = BookingRepository::new(db)
        .create(item.id, booker.id, start, end)
        .await?;

    assert_eq!(booking.item_id, item.id);
    assert_eq!(booking.booker_id, booker.id);
    assert_eq!(booking.status, BookingStatus::Waiting.as_str());
    // Sub-second precision may be truncated by the storage format
    assert!((booking.start - start).num_seconds().abs() < 1);
    assert!((booking.end - end).num_seconds().abs() < 1);

    Ok(())
}
