use super::*;

/// Tests that only the owner's items are returned, ordered by ID.
///
/// Expected: Ok with the owner's two items in insertion order
#[tokio::test]
async fn returns_only_the_owners_items_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(ItemRequest)
        .with_table(Item)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let first = factory::create_item(db, owner.id).await?;
    factory::create_item(db, other.id).await?;
    let second = factory::create_item(db, owner.id).await?;

    let items = ItemRepository::new(db).get_by_owner(owner.id, 0, 10).await?;

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, first.id);
    assert_eq!(items[1].id, second.id);

    Ok(())
}

/// Tests offset and limit on the owner listing.
///
/// Expected: Ok with only the second of three items
#[tokio::test]
async fn applies_offset_and_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(ItemRequest)
        .with_table(Item)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    factory::create_item(db, owner.id).await?;
    let second = factory::create_item(db, owner.id).await?;
    factory::create_item(db, owner.id).await?;

    let items = ItemRepository::new(db).get_by_owner(owner.id, 1, 1).await?;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, second.id);

    Ok(())
}
