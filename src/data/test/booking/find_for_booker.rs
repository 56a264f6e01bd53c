use super::*;
use test_utils::factory::booking::BookingFactory;

/// Tests that ALL returns only the booker's bookings, newest start first.
///
/// Expected: Ok with the booker's two bookings ordered by start descending
#[tokio::test]
async fn returns_only_the_bookers_bookings_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, item) = factory::helpers::create_item_with_owner(db).await?;
    let booker = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let now = Utc::now();
    let earlier = BookingFactory::new(db, item.id, booker.id)
        .start(now + Duration::days(1))
        .end(now + Duration::days(2))
        .build()
        .await?;
    let later = BookingFactory::new(db, item.id, booker.id)
        .start(now + Duration::days(3))
        .end(now + Duration::days(4))
        .build()
        .await?;
    factory::create_booking(db, item.id, other.id).await?;

    let bookings = BookingRepository::new(db)
        .find_for_booker(booker.id, StateFilter::All, now, 0, 10)
        .await?;

    let ids: Vec<i32> = bookings.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![later.id, earlier.id]);

    Ok(())
}

/// Tests the time-based filters against a fixed history.
///
/// One past booking, one active booking and one future booking are created;
/// each time filter must select exactly its own window. The boundary is
/// half-open: a booking is CURRENT from its start up to but excluding its end.
///
/// Expected: Ok with one booking per filter
#[tokio::test]
async fn selects_time_windows_with_current_past_and_future() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, item) = factory::helpers::create_item_with_owner(db).await?;
    let booker = factory::create_user(db).await?;

    let now = Utc::now();
    let past = BookingFactory::new(db, item.id, booker.id)
        .start(now - Duration::days(4))
        .end(now - Duration::days(3))
        .status("APPROVED")
        .build()
        .await?;
    let current = BookingFactory::new(db, item.id, booker.id)
        .start(now - Duration::days(1))
        .end(now + Duration::days(1))
        .status("APPROVED")
        .build()
        .await?;
    let future = BookingFactory::new(db, item.id, booker.id)
        .start(now + Duration::days(3))
        .end(now + Duration::days(4))
        .build()
        .await?;

    let repo = BookingRepository::new(db);

    let found = repo
        .find_for_booker(booker.id, StateFilter::Past, now, 0, 10)
        .await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, past.id);

    let found = repo
        .find_for_booker(booker.id, StateFilter::Current, now, 0, 10)
        .await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, current.id);

    let found = repo
        .find_for_booker(booker.id, StateFilter::Future, now, 0, 10)
        .await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, future.id);

    Ok(())
}

/// Tests the status-based filters.
///
/// Expected: Ok with WAITING and REJECTED each matching only their status
#[tokio::test]
async fn selects_bookings_by_stored_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, item) = factory::helpers::create_item_with_owner(db).await?;
    let booker = factory::create_user(db).await?;

    let waiting = factory::create_booking(db, item.id, booker.id).await?;
    let rejected = BookingFactory::new(db, item.id, booker.id)
        .status("REJECTED")
        .build()
        .await?;
    BookingFactory::new(db, item.id, booker.id)
        .status("APPROVED")
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let now = Utc::now();

    let found = repo
        .find_for_booker(booker.id, StateFilter::Waiting, now, 0, 10)
        .await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, waiting.id);

    let found = repo
        .find_for_booker(booker.id, StateFilter::Rejected, now, 0, 10)
        .await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, rejected.id);

    Ok(())
}
