use super::*;
use test_utils::factory::item_request::RequestFactory;

/// Tests that only the requester's own requests come back, newest first.
///
/// Expected: Ok with the requester's two requests ordered by creation time
/// descending
#[tokio::test]
async fn returns_own_requests_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(ItemRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let now = Utc::now();
    let older = RequestFactory::new(db, requester.id)
        .created(now - Duration::hours(2))
        .build()
        .await?;
    let newer = RequestFactory::new(db, requester.id)
        .created(now - Duration::hours(1))
        .build()
        .await?;
    factory::create_request(db, other.id).await?;

    let requests = RequestRepository::new(db)
        .find_by_requester(requester.id)
        .await?;

    let ids: Vec<i32> = requests.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}
