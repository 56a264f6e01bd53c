use super::*;

/// Tests creating an item request.
///
/// Expected: Ok with requester, description and creation time stored
#[tokio::test]
async fn creates_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(ItemRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::create_user(db).await?;

    let request = RequestRepository::new(db)
        .create(requester.id, "Need a drill".to_string(), Utc::now())
        .await?;

    assert_eq!(request.requester_id, requester.id);
    assert_eq!(request.description, "Need a drill");

    Ok(())
}
