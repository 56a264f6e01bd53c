use super::*;
use entity::prelude::User;

/// Tests deleting an existing user.
///
/// Expected: Ok(1) and the user is gone afterwards
#[tokio::test]
async fn deletes_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let rows = repo.delete(user.id).await?;

    assert_eq!(rows, 1);
    assert!(repo.get_by_id(user.id).await?.is_none());

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn reports_zero_rows_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let rows = UserRepository::new(db).delete(999).await?;

    assert_eq!(rows, 0);

    Ok(())
}
