use super::*;

/// Tests creating an item without a request reference.
///
/// Expected: Ok with the stored item carrying the owner and no request
#[tokio::test]
async fn creates_item_without_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(ItemRequest)
        .with_table(Item)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let repo = ItemRepository::new(db);
    let item = repo
        .create(
            owner.id,
            "Drill".to_string(),
            "Cordless power drill".to_string(),
            true,
            None,
        )
        .await?;

    assert_eq!(item.owner_id, owner.id);
    assert_eq!(item.name, "Drill");
    assert!(item.available);
    assert!(item.request_id.is_none());

    Ok(())
}

/// Tests creating an item that fulfills a request.
///
/// Expected: Ok with the request reference stored
#[tokio::test]
async fn creates_item_with_request_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(ItemRequest)
        .with_table(Item)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let requester = factory::create_user(db).await?;
    let request = factory::create_request(db, requester.id).await?;

    let item = ItemRepository::new(db)
        .create(
            owner.id,
            "Ladder".to_string(),
            "Folding ladder".to_string(),
            true,
            Some(request.id),
        )
        .await?;

    assert_eq!(item.request_id, Some(request.id));

    Ok(())
}
