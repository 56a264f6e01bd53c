use super::*;
use entity::prelude::User;

/// Tests creating a new user.
///
/// Verifies that the repository inserts the user with the given name and email
/// and that the row is readable afterwards.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create("Alice".to_string(), "alice@example.com".to_string())
        .await?;

    assert_eq!(user.name, "Alice");
    assert_eq!(user.email, "alice@example.com");

    let stored = repo.get_by_id(user.id).await?;
    assert_eq!(stored, Some(user));

    Ok(())
}

/// Tests that the unique index on email rejects a second user with the same
/// address.
///
/// Expected: Err from the database on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create("Alice".to_string(), "shared@example.com".to_string())
        .await?;

    let result = repo
        .create("Bob".to_string(), "shared@example.com".to_string())
        .await;

    assert!(result.is_err());

    Ok(())
}
