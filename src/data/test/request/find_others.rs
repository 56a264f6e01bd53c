use super::*;
use test_utils::factory::item_request::RequestFactory;

/// Tests that the caller's own requests are excluded from the shared listing.
///
/// Expected: Ok with only the other user's requests, newest first
#[tokio::test]
async fn excludes_the_callers_own_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(ItemRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let caller = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let now = Utc::now();
    factory::create_request(db, caller.id).await?;
    let older = RequestFactory::new(db, other.id)
        .created(now - Duration::hours(2))
        .build()
        .await?;
    let newer = RequestFactory::new(db, other.id)
        .created(now - Duration::hours(1))
        .build()
        .await?;

    let requests = RequestRepository::new(db)
        .find_others(caller.id, 0, 10)
        .await?;

    let ids: Vec<i32> = requests.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}

/// Tests offset and limit on the shared listing.
///
/// Expected: Ok with only the second-newest request
#[tokio::test]
async fn applies_offset_and_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(ItemRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let caller = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let now = Utc::now();
    for hours in 1..=3 {
        RequestFactory::new(db, other.id)
            .created(now - Duration::hours(hours))
            .build()
            .await?;
    }

    let requests = RequestRepository::new(db)
        .find_others(caller.id, 1, 1)
        .await?;

    assert_eq!(requests.len(), 1);
    // Newest first, so offset 1 is the request created two hours ago
    assert!((requests[0].created - (now - Duration::hours(2))).num_seconds().abs() < 1);

    Ok(())
}
