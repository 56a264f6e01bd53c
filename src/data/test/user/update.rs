use super::*;
use entity::prelude::User;

/// Tests updating a user's name and email.
///
/// Expected: Ok with both fields replaced and the change persisted
#[tokio::test]
async fn updates_name_and_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let user_id = user.id;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(user, "Renamed".to_string(), "renamed@example.com".to_string())
        .await?;

    assert_eq!(updated.id, user_id);
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.email, "renamed@example.com");

    let stored = repo.get_by_id(user_id).await?;
    assert_eq!(stored, Some(updated));

    Ok(())
}
