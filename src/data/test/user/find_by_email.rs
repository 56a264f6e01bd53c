use super::*;
use entity::prelude::User;

/// Tests looking up a user by their exact email address.
///
/// Expected: Ok(Some) for a stored address, Ok(None) for an unknown one
#[tokio::test]
async fn finds_user_by_exact_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("lookup@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_email("lookup@example.com").await?;
    assert_eq!(found, Some(user));

    let missing = repo.find_by_email("nobody@example.com").await?;
    assert!(missing.is_none());

    Ok(())
}
