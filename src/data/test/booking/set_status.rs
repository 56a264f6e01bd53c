use super::*;

/// Tests moving a WAITING booking to APPROVED.
///
/// Expected: Ok with the new status persisted
#[tokio::test]
async fn persists_the_new_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _booker, _item, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;
    let booking_id = booking.id;

    let repo = BookingRepository::new(db);
    let updated = repo.set_status(booking, BookingStatus::Approved).await?;

    assert_eq!(updated.status, BookingStatus::Approved.as_str());

    let stored = repo.get_by_id(booking_id).await?.unwrap();
    assert_eq!(stored.status, BookingStatus::Approved.as_str());

    Ok(())
}
