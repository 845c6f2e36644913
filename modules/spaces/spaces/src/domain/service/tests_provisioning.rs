#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use metaverse_db::Db;
use metaverse_security::SecurityContext;
use spaces_sdk::{NewSpace, Space, SpaceElement};
use tracing_test::traced_test;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::repos::SpacesRepository;
use crate::infra::storage::OrmSpacesRepository;
use crate::test_support::{USER_A, ctx_user, inmem_db, seed_element, seed_map, services};

fn new_space(name: &str, dimensions: &str, map_id: Option<Uuid>) -> NewSpace {
    NewSpace {
        name: name.to_owned(),
        dimensions: dimensions.to_owned(),
        map_id,
    }
}

async fn count_space_elements(db: &Db, space_id: Uuid) -> usize {
    OrmSpacesRepository::new(db.clone())
        .get_detail(space_id)
        .await
        .unwrap()
        .map_or(0, |d| d.elements.len())
}

#[tokio::test]
#[traced_test]
async fn empty_space_gets_requested_dimensions() {
    let db = inmem_db().await;
    let svc = services(db.clone());
    let ctx = ctx_user(USER_A);

    let id = svc
        .provisioning
        .create_space(&ctx, new_space("Empty", "200x150", None))
        .await
        .unwrap();

    let detail = svc.spaces.get_space(&ctx, id).await.unwrap();
    assert_eq!(detail.space.width, 200);
    assert_eq!(detail.space.height, 150);
    assert_eq!(detail.space.creator_id, USER_A);
    assert!(detail.elements.is_empty());
    assert!(logs_contain("Space created"));
}

#[tokio::test]
async fn malformed_dimensions_are_rejected_before_any_write() {
    let db = inmem_db().await;
    let svc = services(db);
    let ctx = ctx_user(USER_A);

    for bad in ["100", "100x", "x100", "12345x10", "10X10", "-5x5", "10x10x10", " 10x10"] {
        let err = svc
            .provisioning
            .create_space(&ctx, new_space("Room", bad, None))
            .await
            .unwrap_err();
        assert!(
            matches!(err, DomainError::Validation { ref field, .. } if field == "dimensions"),
            "{bad}: {err:?}"
        );
    }

    assert!(svc.spaces.list_spaces(&ctx).await.unwrap().is_empty());
}

#[tokio::test]
async fn empty_name_is_accepted() {
    let svc = services(inmem_db().await);
    let ctx = ctx_user(USER_A);
    let id = svc
        .provisioning
        .create_space(&ctx, new_space("", "10x10", None))
        .await
        .unwrap();

    let detail = svc.spaces.get_space(&ctx, id).await.unwrap();
    assert_eq!(detail.space.name, "");
}

#[tokio::test]
async fn overlong_name_is_rejected() {
    let svc = services(inmem_db().await);
    let name = "x".repeat(101);
    let err = svc
        .provisioning
        .create_space(&ctx_user(USER_A), new_space(&name, "10x10", None))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "name"));
}

#[tokio::test]
async fn anonymous_caller_cannot_create() {
    let svc = services(inmem_db().await);
    let err = svc
        .provisioning
        .create_space(&SecurityContext::anonymous(), new_space("Room", "10x10", None))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden));
}

#[tokio::test]
async fn map_template_is_cloned() {
    let db = inmem_db().await;
    let e1 = Uuid::now_v7();
    let e2 = Uuid::now_v7();
    seed_element(&db, e1, 1, 1).await;
    seed_element(&db, e2, 2, 2).await;
    let map_id = Uuid::now_v7();
    seed_map(&db, map_id, "m1", 50, 50, &[(e1, 10, 10), (e2, 20, 30)]).await;

    let svc = services(db.clone());
    let ctx = ctx_user(USER_A);

    // Caller dimensions are validated but the template's canvas wins.
    let id = svc
        .provisioning
        .create_space(&ctx, new_space("From map", "999x999", Some(map_id)))
        .await
        .unwrap();

    let detail = svc.spaces.get_space(&ctx, id).await.unwrap();
    assert_eq!((detail.space.width, detail.space.height), (50, 50));
    assert_eq!(detail.elements.len(), 2);

    let mut placed: Vec<(Uuid, i32, i32)> = detail
        .elements
        .iter()
        .map(|p| (p.element.id, p.x, p.y))
        .collect();
    placed.sort();
    let mut expected = vec![(e1, 10, 10), (e2, 20, 30)];
    expected.sort();
    assert_eq!(placed, expected);
}

#[tokio::test]
async fn unknown_map_is_not_found_and_nothing_is_written() {
    let db = inmem_db().await;
    let svc = services(db);
    let ctx = ctx_user(USER_A);

    let err = svc
        .provisioning
        .create_space(&ctx, new_space("Room", "10x10", Some(Uuid::now_v7())))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::NotFound { entity: "map", .. }));
    assert!(svc.spaces.list_spaces(&ctx).await.unwrap().is_empty());
}

#[tokio::test]
async fn failed_unit_of_work_leaves_no_space_behind() {
    let db = inmem_db().await;
    let element_id = Uuid::now_v7();
    seed_element(&db, element_id, 1, 1).await;

    let repo = Arc::new(OrmSpacesRepository::new(db.clone()));
    let space_id = Uuid::now_v7();
    let dup = Uuid::now_v7();
    let row = |x| SpaceElement {
        id: dup,
        space_id,
        element_id,
        x,
        y: 0,
    };

    let res = repo
        .create_space_and_elements(
            Space {
                id: space_id,
                name: "Doomed".to_owned(),
                thumbnail: None,
                width: 10,
                height: 10,
                creator_id: USER_A,
            },
            vec![row(1), row(2)],
        )
        .await;

    assert!(matches!(res, Err(DomainError::Storage(_))));
    assert!(repo.get_by_id_with_owner(space_id).await.unwrap().is_none());
    assert_eq!(count_space_elements(&db, space_id).await, 0);
}
