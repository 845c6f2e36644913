#![allow(clippy::unwrap_used, clippy::expect_used)]

use metaverse_security::{Role, SecurityContext};
use spaces_sdk::NewAvatar;
use tracing_test::traced_test;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::service::AppServices;
use crate::test_support::{USER_A, USER_B, ctx_admin, ctx_user, inmem_db, services};

async fn avatar(svc: &AppServices, name: &str) -> Uuid {
    svc.catalog
        .create_avatar(
            &ctx_admin(),
            NewAvatar {
                name: name.to_owned(),
                image_url: format!("https://cdn.example/{name}.png"),
            },
        )
        .await
        .unwrap()
}

#[tokio::test]
#[traced_test]
async fn chosen_avatar_shows_on_current_user() {
    let svc = services(inmem_db().await);
    let cat = avatar(&svc, "cat").await;
    let ctx = ctx_user(USER_A);

    let before = svc.users.current_user(&ctx).await.unwrap();
    assert_eq!(before.id, USER_A);
    assert_eq!(before.role, Role::User);
    assert!(before.avatar_image_url.is_none());

    svc.users.update_avatar(&ctx, cat).await.unwrap();
    assert!(logs_contain("Metadata updated"));

    let after = svc.users.current_user(&ctx).await.unwrap();
    assert_eq!(
        after.avatar_image_url.as_deref(),
        Some("https://cdn.example/cat.png")
    );
}

#[tokio::test]
async fn second_choice_replaces_the_first() {
    let svc = services(inmem_db().await);
    let cat = avatar(&svc, "cat").await;
    let dog = avatar(&svc, "dog").await;
    let ctx = ctx_user(USER_A);

    svc.users.update_avatar(&ctx, cat).await.unwrap();
    svc.users.update_avatar(&ctx, dog).await.unwrap();

    let found = svc.users.user_avatars(&[USER_A]).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(
        found[0].image_url.as_deref(),
        Some("https://cdn.example/dog.png")
    );
}

#[tokio::test]
async fn unknown_avatar_is_a_validation_error() {
    let svc = services(inmem_db().await);
    let ctx = ctx_user(USER_A);

    let err = svc
        .users
        .update_avatar(&ctx, Uuid::now_v7())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "avatarId"));
    assert!(svc.users.user_avatars(&[USER_A]).await.unwrap().is_empty());
}

#[tokio::test]
async fn anonymous_caller_has_no_metadata() {
    let svc = services(inmem_db().await);
    let cat = avatar(&svc, "cat").await;
    let anon = SecurityContext::anonymous();

    let err = svc.users.update_avatar(&anon, cat).await.unwrap_err();
    assert!(matches!(err, DomainError::Forbidden));

    let err = svc.users.current_user(&anon).await.unwrap_err();
    assert!(matches!(err, DomainError::Forbidden));
}

#[tokio::test]
async fn bulk_lookup_skips_unknown_users() {
    let svc = services(inmem_db().await);
    let cat = avatar(&svc, "cat").await;
    svc.users.update_avatar(&ctx_user(USER_A), cat).await.unwrap();
    svc.users.update_avatar(&ctx_user(USER_B), cat).await.unwrap();

    let found = svc
        .users
        .user_avatars(&[USER_B, Uuid::now_v7(), USER_A])
        .await
        .unwrap();
    let ids: Vec<Uuid> = found.iter().map(|u| u.user_id).collect();
    assert_eq!(ids, vec![USER_A, USER_B]);

    assert!(svc.users.user_avatars(&[]).await.unwrap().is_empty());
}
