use super::*;

/// Tests replacing an item's mutable fields.
///
/// Expected: Ok with name, description and availability updated, owner and
/// request reference untouched
#[tokio::test]
async fn replaces_mutable_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(ItemRequest)
        .with_table(Item)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, item) = factory::helpers::create_item_with_owner(db).await?;
    let item_id = item.id;

    let updated = ItemRepository::new(db)
        .update(item, "New name".to_string(), "New description".to_string(), false)
        .await?;

    assert_eq!(updated.id, item_id);
    assert_eq!(updated.name, "New name");
    assert_eq!(updated.description, "New description");
    assert!(!updated.available);
    assert_eq!(updated.owner_id, owner.id);

    Ok(())
}
