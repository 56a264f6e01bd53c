use entity::prelude::User;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    error::AppError,
    model::user::{CreateUserDto, UpdateUserDto},
    service::user::UserService,
};

/// Tests registering and reading back a user.
///
/// Expected: Ok on create, same data on read
#[tokio::test]
async fn creates_and_reads_user() {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);

    let created = service
        .create(CreateUserDto {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        })
        .await
        .unwrap();

    let read = service.get_user(created.id).await.unwrap();
    assert_eq!(read, created);
}

/// Tests registering with an email that is already taken.
///
/// Expected: Conflict error naming the address
#[tokio::test]
async fn rejects_taken_email_with_conflict() {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await
        .unwrap();

    let result = UserService::new(db)
        .create(CreateUserDto {
            name: "Bob".to_string(),
            email: "taken@example.com".to_string(),
        })
        .await;

    match result {
        Err(AppError::Conflict(msg)) => {
            assert_eq!(msg, "Email taken@example.com is already in use")
        }
        other => panic!("expected conflict error, got {:?}", other.map(|u| u.id)),
    }
}

/// Tests registering with a malformed email.
///
/// Expected: Validation error for a missing @ and for empty halves
#[tokio::test]
async fn rejects_malformed_email() {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);

    for email in ["no-at-sign", "@example.com", "user@"] {
        let result = service
            .create(CreateUserDto {
                name: "Bob".to_string(),
                email: email.to_string(),
            })
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))), "{}", email);
    }
}

/// Tests updating only the name, leaving the email untouched.
///
/// Keeping one's own email on update must not trigger the conflict check.
///
/// Expected: Ok with the new name and the original email
#[tokio::test]
async fn updates_name_only() {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await.unwrap();
    let service = UserService::new(db);

    let updated = service
        .update(
            user.id,
            UpdateUserDto {
                name: Some("Renamed".to_string()),
                email: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.email, user.email);

    // Re-submitting the same email is not a conflict
    let same_email = service
        .update(
            user.id,
            UpdateUserDto {
                name: None,
                email: Some(user.email.clone()),
            },
        )
        .await;
    assert!(same_email.is_ok());
}

/// Tests updating to an email held by another user.
///
/// Expected: Conflict error
#[tokio::test]
async fn update_rejects_anothers_email() {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await.unwrap();
    let second = factory::create_user(db).await.unwrap();

    let result = UserService::new(db)
        .update(
            second.id,
            UpdateUserDto {
                name: None,
                email: Some(first.email),
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

/// Tests deleting a user twice.
///
/// Expected: Ok on the first delete, NotFound on the second
#[tokio::test]
async fn delete_is_not_idempotent() {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await.unwrap();
    let service = UserService::new(db);

    service.delete(user.id).await.unwrap();

    let second = service.delete(user.id).await;
    assert!(matches!(second, Err(AppError::NotFound(_))));
}

/// Tests reading a user that does not exist.
///
/// Expected: NotFound error naming the ID
#[tokio::test]
async fn missing_user_is_not_found() {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    match UserService::new(db).get_user(42).await {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "User with ID=42 not found"),
        other => panic!("expected not-found error, got {:?}", other.map(|u| u.id)),
    }
}
