use super::*;

/// Tests creating a comment with a caller-supplied creation time.
///
/// Expected: Ok with text, author and item stored
#[tokio::test]
async fn creates_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, item) = factory::helpers::create_item_with_owner(db).await?;
    let author = factory::create_user(db).await?;

    let comment = CommentRepository::new(db)
        .create(item.id, author.id, "Worked great".to_string(), Utc::now())
        .await?;

    assert_eq!(comment.item_id, item.id);
    assert_eq!(comment.author_id, author.id);
    assert_eq!(comment.text, "Worked great");

    Ok(())
}
