use super::*;

/// Tests that an item's comments come back oldest first and other items'
/// comments are excluded.
///
/// Expected: Ok with the item's two comments in creation order
#[tokio::test]
async fn returns_comments_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, item) = factory::helpers::create_item_with_owner(db).await?;
    let (_other_owner, other_item) = factory::helpers::create_item_with_owner(db).await?;
    let author = factory::create_user(db).await?;

    let now = Utc::now();
    let repo = CommentRepository::new(db);

    let newer = repo
        .create(item.id, author.id, "Second".to_string(), now)
        .await?;
    let older = repo
        .create(
            item.id,
            author.id,
            "First".to_string(),
            now - Duration::hours(1),
        )
        .await?;
    factory::create_comment(db, other_item.id, author.id).await?;

    let comments = repo.find_by_item(item.id).await?;

    let ids: Vec<i32> = comments.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![older.id, newer.id]);

    Ok(())
}

/// Tests the batch lookup used for the owner's item listing.
///
/// Expected: Ok with comments of both items; an empty ID list yields an empty
/// result
#[tokio::test]
async fn batches_lookup_across_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, first) = factory::helpers::create_item_with_owner(db).await?;
    let second = factory::item::create_item(db, owner.id).await?;
    let author = factory::create_user(db).await?;

    factory::create_comment(db, first.id, author.id).await?;
    factory::create_comment(db, second.id, author.id).await?;

    let repo = CommentRepository::new(db);

    let comments = repo.find_by_items(vec![first.id, second.id]).await?;
    assert_eq!(comments.len(), 2);

    let none = repo.find_by_items(vec![]).await?;
    assert!(none.is_empty());

    Ok(())
}
