use super::*;
use entity::prelude::User;

/// Tests getting an existing user by ID.
///
/// Expected: Ok(Some) with the stored user
#[tokio::test]
async fn returns_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let found = UserRepository::new(db).get_by_id(user.id).await?;

    assert_eq!(found, Some(user));

    Ok(())
}

/// Tests getting a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let found = UserRepository::new(db).get_by_id(999).await?;

    assert!(found.is_none());

    Ok(())
}
