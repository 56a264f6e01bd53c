use super::*;
use test_utils::factory::item::ItemFactory;

/// Tests finding the items that fulfill a single request.
///
/// Expected: Ok with only items referencing the request
#[tokio::test]
async fn returns_items_fulfilling_the_request() -> Result<(), DbErr> {
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
    let other_request = factory::create_request(db, requester.id).await?;

    let fulfilling = ItemFactory::new(db, owner.id)
        .request_id(request.id)
        .build()
        .await?;
    ItemFactory::new(db, owner.id)
        .request_id(other_request.id)
        .build()
        .await?;
    factory::create_item(db, owner.id).await?;

    let items = ItemRepository::new(db).find_by_request(request.id).await?;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, fulfilling.id);

    Ok(())
}

/// Tests the batch lookup across several requests.
///
/// Expected: Ok with the items of both requests and nothing else; an empty
/// ID list short-circuits to an empty result
#[tokio::test]
async fn batches_lookup_across_requests() -> Result<(), DbErr> {
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
    let first = factory::create_request(db, requester.id).await?;
    let second = factory::create_request(db, requester.id).await?;

    ItemFactory::new(db, owner.id)
        .request_id(first.id)
        .build()
        .await?;
    ItemFactory::new(db, owner.id)
        .request_id(second.id)
        .build()
        .await?;
    factory::create_item(db, owner.id).await?;

    let repo = ItemRepository::new(db);

    let items = repo.find_by_requests(vec![first.id, second.id]).await?;
    assert_eq!(items.len(), 2);

    let none = repo.find_by_requests(vec![]).await?;
    assert!(none.is_empty());

    Ok(())
}
