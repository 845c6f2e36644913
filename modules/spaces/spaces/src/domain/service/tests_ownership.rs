#![allow(clippy::unwrap_used, clippy::expect_used)]

use metaverse_security::SecurityContext;
use sea_orm::ConnectionTrait;
use spaces_sdk::{NewSpace, NewSpaceElement};
use tracing_test::traced_test;
use uuid::Uuid;

use crate::config::SpacesConfig;
use crate::domain::error::DomainError;
use crate::domain::service::AppServices;
use crate::module::build_services;
use crate::test_support::{
    PermissivePdp, USER_A, USER_B, UnavailablePdp, ctx_user, inmem_db, seed_element, services,
};

async fn space_of(svc: &AppServices, owner: Uuid, dimensions: &str) -> Uuid {
    svc.provisioning
        .create_space(
            &ctx_user(owner),
            NewSpace {
                name: "Room".to_owned(),
                dimensions: dimensions.to_owned(),
                map_id: None,
            },
        )
        .await
        .unwrap()
}

fn placement(space_id: Uuid, element_id: Uuid, x: i32, y: i32) -> NewSpaceElement {
    NewSpaceElement {
        space_id,
        element_id,
        x,
        y,
    }
}

#[tokio::test]
#[traced_test]
async fn only_the_creator_deletes_a_space() {
    let db = inmem_db().await;
    let svc = services(db);
    let id = space_of(&svc, USER_A, "100x100").await;

    let err = svc.spaces.delete_space(&ctx_user(USER_B), id).await.unwrap_err();
    assert!(matches!(err, DomainError::Forbidden));
    assert!(svc.spaces.get_space(&ctx_user(USER_A), id).await.is_ok());

    svc.spaces.delete_space(&ctx_user(USER_A), id).await.unwrap();
    assert!(logs_contain("Space deleted"));

    let err = svc.spaces.delete_space(&ctx_user(USER_A), id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { entity: "space", .. }));
}

#[tokio::test]
async fn delete_cascades_to_placed_elements() {
    let db = inmem_db().await;
    let element_id = Uuid::now_v7();
    seed_element(&db, element_id, 1, 1).await;
    let svc = services(db);
    let a = ctx_user(USER_A);
    let id = space_of(&svc, USER_A, "100x100").await;

    let placed = svc
        .spaces
        .add_element(&a, placement(id, element_id, 5, 5))
        .await
        .unwrap();
    svc.spaces.delete_space(&a, id).await.unwrap();

    assert!(matches!(
        svc.spaces.get_space(&a, id).await,
        Err(DomainError::NotFound { .. })
    ));
    // The placed element went with its space.
    assert!(matches!(
        svc.spaces.delete_element(&a, placed).await,
        Err(DomainError::Forbidden)
    ));
}

#[tokio::test]
async fn failed_cascade_keeps_space_and_elements() {
    let db = inmem_db().await;
    let element_id = Uuid::now_v7();
    seed_element(&db, element_id, 1, 1).await;
    let svc = services(db.clone());
    let a = ctx_user(USER_A);
    let id = space_of(&svc, USER_A, "100x100").await;
    svc.spaces
        .add_element(&a, placement(id, element_id, 1, 1))
        .await
        .unwrap();
    svc.spaces
        .add_element(&a, placement(id, element_id, 2, 2))
        .await
        .unwrap();

    // Element rows go first; the space row delete then aborts.
    db.conn()
        .execute_unprepared(
            "CREATE TRIGGER block_space_delete BEFORE DELETE ON spaces \
             BEGIN SELECT RAISE(ABORT, 'space delete blocked'); END;",
        )
        .await
        .unwrap();

    let err = svc.spaces.delete_space(&a, id).await.unwrap_err();
    assert!(matches!(err, DomainError::Storage(_)));

    let detail = svc.spaces.get_space(&a, id).await.unwrap();
    assert_eq!(detail.elements.len(), 2);
}

#[tokio::test]
async fn add_element_checks_run_in_order() {
    let db = inmem_db().await;
    let element_id = Uuid::now_v7();
    seed_element(&db, element_id, 1, 1).await;
    let svc = services(db);
    let id = space_of(&svc, USER_A, "100x100").await;
    let a = ctx_user(USER_A);
    let b = ctx_user(USER_B);

    let missing_space = svc
        .spaces
        .add_element(&a, placement(Uuid::now_v7(), element_id, 1, 1))
        .await
        .unwrap_err();
    assert!(matches!(missing_space, DomainError::NotFound { entity: "space", .. }));

    // Not owner wins over a bad element and bad coordinates.
    let not_owner = svc
        .spaces
        .add_element(&b, placement(id, Uuid::now_v7(), 500, 500))
        .await
        .unwrap_err();
    assert!(matches!(not_owner, DomainError::Forbidden));

    let missing_element = svc
        .spaces
        .add_element(&a, placement(id, Uuid::now_v7(), 500, 500))
        .await
        .unwrap_err();
    assert!(matches!(missing_element, DomainError::NotFound { entity: "element", .. }));
}

#[tokio::test]
async fn bounds_are_inclusive() {
    let db = inmem_db().await;
    let element_id = Uuid::now_v7();
    seed_element(&db, element_id, 1, 1).await;
    let svc = services(db);
    let id = space_of(&svc, USER_A, "100x100").await;
    let a = ctx_user(USER_A);

    for (x, y) in [(100, 100), (0, 0), (100, 0)] {
        assert!(svc.spaces.add_element(&a, placement(id, element_id, x, y)).await.is_ok());
    }
    for (x, y) in [(101, 0), (0, 101), (-1, 0), (0, -1)] {
        let err = svc
            .spaces
            .add_element(&a, placement(id, element_id, x, y))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::OutOfBounds { .. }), "({x}, {y})");
    }

    let detail = svc.spaces.get_space(&a, id).await.unwrap();
    assert_eq!(detail.elements.len(), 3);
}

#[tokio::test]
async fn delete_element_conflates_missing_and_foreign() {
    let db = inmem_db().await;
    let element_id = Uuid::now_v7();
    seed_element(&db, element_id, 1, 1).await;
    let svc = services(db);
    let id = space_of(&svc, USER_A, "100x100").await;
    let a = ctx_user(USER_A);
    let b = ctx_user(USER_B);

    let placed = svc
        .spaces
        .add_element(&a, placement(id, element_id, 10, 10))
        .await
        .unwrap();

    assert!(matches!(
        svc.spaces.delete_element(&b, placed).await,
        Err(DomainError::Forbidden)
    ));
    assert!(matches!(
        svc.spaces.delete_element(&a, Uuid::now_v7()).await,
        Err(DomainError::Forbidden)
    ));

    svc.spaces.delete_element(&a, placed).await.unwrap();
    assert!(svc.spaces.get_space(&a, id).await.unwrap().elements.is_empty());
}

#[tokio::test]
async fn list_is_narrowed_to_the_caller() {
    let svc = services(inmem_db().await);
    let a1 = space_of(&svc, USER_A, "10x10").await;
    let a2 = space_of(&svc, USER_A, "20x20").await;
    let b1 = space_of(&svc, USER_B, "30x30").await;

    let mut mine: Vec<Uuid> = svc
        .spaces
        .list_spaces(&ctx_user(USER_A))
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.id)
        .collect();
    mine.sort();
    let mut expected = vec![a1, a2];
    expected.sort();
    assert_eq!(mine, expected);

    let theirs = svc.spaces.list_spaces(&ctx_user(USER_B)).await.unwrap();
    assert_eq!(theirs.len(), 1);
    assert_eq!(theirs[0].id, b1);
}

#[tokio::test]
async fn unconstrained_pdp_cannot_widen_list() {
    let db = inmem_db().await;
    let owner_svc = services(db.clone());
    space_of(&owner_svc, USER_A, "10x10").await;
    let b1 = space_of(&owner_svc, USER_B, "10x10").await;

    let svc = build_services(db, std::sync::Arc::new(PermissivePdp), SpacesConfig::default());
    let listed = svc.spaces.list_spaces(&ctx_user(USER_B)).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, b1);
}

#[tokio::test]
async fn anonymous_list_is_forbidden() {
    let svc = services(inmem_db().await);
    space_of(&svc, USER_A, "10x10").await;

    let err = svc
        .spaces
        .list_spaces(&SecurityContext::anonymous())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden));
}

#[tokio::test]
async fn get_is_public() {
    let svc = services(inmem_db().await);
    let id = space_of(&svc, USER_A, "10x10").await;

    let detail = svc
        .spaces
        .get_space(&SecurityContext::anonymous(), id)
        .await
        .unwrap();
    assert_eq!(detail.space.id, id);
}

#[tokio::test]
async fn pdp_outage_is_internal() {
    let db = inmem_db().await;
    let owner_svc = services(db.clone());
    let id = space_of(&owner_svc, USER_A, "10x10").await;

    let svc = build_services(
        db,
        std::sync::Arc::new(UnavailablePdp),
        SpacesConfig::default(),
    );
    let err = svc.spaces.delete_space(&ctx_user(USER_A), id).await.unwrap_err();
    assert!(matches!(err, DomainError::Internal(_)));

    // Nothing was deleted.
    assert!(owner_svc.spaces.get_space(&ctx_user(USER_A), id).await.is_ok());
}
