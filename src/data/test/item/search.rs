use super::*;
use test_utils::factory::item::ItemFactory;

/// Tests that search matches names and descriptions regardless of case.
///
/// Expected: Ok with both the name match and the description match
#[tokio::test]
async fn matches_name_and_description_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(ItemRequest)
        .with_table(Item)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let by_name = ItemFactory::new(db, owner.id)
        .name("Power Drill")
        .description("For holes")
        .build()
        .await?;
    let by_description = ItemFactory::new(db, owner.id)
        .name("Toolbox")
        .description("Includes a small DRILL bit set")
        .build()
        .await?;
    ItemFactory::new(db, owner.id)
        .name("Ladder")
        .description("Folding ladder")
        .build()
        .await?;

    let found = ItemRepository::new(db).search("drill", 0, 10).await?;

    let ids: Vec<i32> = found.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![by_name.id, by_description.id]);

    Ok(())
}

/// Tests that unavailable items are excluded from search results.
///
/// Expected: Ok with only the available item
#[tokio::test]
async fn excludes_unavailable_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(ItemRequest)
        .with_table(Item)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let available = ItemFactory::new(db, owner.id)
        .name("Hammer")
        .build()
        .await?;
    ItemFactory::new(db, owner.id)
        .name("Hammer drill")
        .available(false)
        .build()
        .await?;

    let found = ItemRepository::new(db).search("hammer", 0, 10).await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, available.id);

    Ok(())
}
