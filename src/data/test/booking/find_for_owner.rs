use super::*;

/// Tests that the owner-side listing spans all of the owner's items and
/// nothing else.
///
/// Two items of one owner each get a booking; an unrelated owner's item gets
/// a third. The listing must contain exactly the first owner's two bookings.
///
/// Expected: Ok with two bookings, newest start first
#[tokio::test]
async fn spans_all_items_of_the_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, first_item) = factory::helpers::create_item_with_owner(db).await?;
    let second_item = factory::item::create_item(db, owner.id).await?;
    let (_other_owner, other_item) = factory::helpers::create_item_with_owner(db).await?;
    let booker = factory::create_user(db).await?;

    let now = Utc::now();
    let earlier = factory::booking::BookingFactory::new(db, first_item.id, booker.id)
        .start(now + Duration::days(1))
        .end(now + Duration::days(2))
        .build()
        .await?;
    let later = factory::booking::BookingFactory::new(db, second_item.id, booker.id)
        .start(now + Duration::days(3))
        .end(now + Duration::days(4))
        .build()
        .await?;
    factory::create_booking(db, other_item.id, booker.id).await?;

    let bookings = BookingRepository::new(db)
        .find_for_owner(owner.id, StateFilter::All, now, 0, 10)
        .await?;

    let ids: Vec<i32> = bookings.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![later.id, earlier.id]);

    Ok(())
}

/// Tests that the state filter applies on the owner side as well.
///
/// Expected: Ok with only the WAITING booking
#[tokio::test]
async fn applies_state_filter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, item) = factory::helpers::create_item_with_owner(db).await?;
    let booker = factory::create_user(db).await?;

    let waiting = factory::create_booking(db, item.id, booker.id).await?;
    factory::booking::BookingFactory::new(db, item.id, booker.id)
        .status("APPROVED")
        .build()
        .await?;

    let bookings = BookingRepository::new(db)
        .find_for_owner(owner.id, StateFilter::Waiting, Utc::now(), 0, 10)
        .await?;

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].id, waiting.id);

    Ok(())
}
