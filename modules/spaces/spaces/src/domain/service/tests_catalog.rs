#![allow(clippy::unwrap_used, clippy::expect_used)]

use spaces_sdk::{ElementPatch, MapElement, NewAvatar, NewElement, NewMap, NewSpace};
use tracing_test::traced_test;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::test_support::{USER_A, ctx_admin, ctx_user, inmem_db, services};

fn chair() -> NewElement {
    NewElement {
        image_url: "https://cdn.example/chair.png".to_owned(),
        width: 2,
        height: 3,
        is_static: true,
    }
}

#[tokio::test]
#[traced_test]
async fn created_element_is_listed_and_updatable() {
    let svc = services(inmem_db().await);
    let admin = ctx_admin();

    let id = svc.catalog.create_element(&admin, chair()).await.unwrap();
    assert!(logs_contain("Element created"));

    svc.catalog
        .update_element(
            &admin,
            id,
            ElementPatch {
                image_url: "https://cdn.example/chair-v2.png".to_owned(),
            },
        )
        .await
        .unwrap();

    let elements = svc.catalog.list_elements().await.unwrap();
    assert_eq!(elements.len(), 1);
    assert_eq!(elements[0].id, id);
    assert_eq!(elements[0].image_url, "https://cdn.example/chair-v2.png");
    assert!(elements[0].is_static);
}

#[tokio::test]
async fn element_needs_positive_size_and_an_image() {
    let svc = services(inmem_db().await);
    let admin = ctx_admin();

    let mut flat = chair();
    flat.height = 0;
    assert!(matches!(
        svc.catalog.create_element(&admin, flat).await,
        Err(DomainError::Validation { .. })
    ));

    let mut blank = chair();
    blank.image_url = " ".to_owned();
    assert!(matches!(
        svc.catalog.create_element(&admin, blank).await,
        Err(DomainError::Validation { .. })
    ));
}

#[tokio::test]
async fn updating_unknown_element_is_not_found() {
    let svc = services(inmem_db().await);
    let err = svc
        .catalog
        .update_element(
            &ctx_admin(),
            Uuid::now_v7(),
            ElementPatch {
                image_url: "https://cdn.example/x.png".to_owned(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { entity: "element", .. }));
}

#[tokio::test]
async fn avatars_round_trip_through_the_catalog() {
    let svc = services(inmem_db().await);
    let id = svc
        .catalog
        .create_avatar(
            &ctx_admin(),
            NewAvatar {
                name: "Robot".to_owned(),
                image_url: "https://cdn.example/robot.png".to_owned(),
            },
        )
        .await
        .unwrap();

    let avatars = svc.catalog.list_avatars().await.unwrap();
    assert_eq!(avatars.len(), 1);
    assert_eq!(avatars[0].id, id);
    assert_eq!(avatars[0].name, "Robot");
}

#[tokio::test]
async fn created_map_seeds_new_spaces() {
    let svc = services(inmem_db().await);
    let admin = ctx_admin();
    let e1 = svc.catalog.create_element(&admin, chair()).await.unwrap();

    let map_id = svc
        .catalog
        .create_map(
            &admin,
            NewMap {
                name: "m1".to_owned(),
                thumbnail: "https://cdn.example/m1.png".to_owned(),
                dimensions: "50x50".to_owned(),
                default_elements: vec![MapElement {
                    element_id: e1,
                    x: 10,
                    y: 10,
                }],
            },
        )
        .await
        .unwrap();

    let a = ctx_user(USER_A);
    let space_id = svc
        .provisioning
        .create_space(
            &a,
            NewSpace {
                name: "From m1".to_owned(),
                dimensions: "100x100".to_owned(),
                map_id: Some(map_id),
            },
        )
        .await
        .unwrap();

    let detail = svc.spaces.get_space(&a, space_id).await.unwrap();
    assert_eq!((detail.space.width, detail.space.height), (50, 50));
    assert_eq!(detail.elements.len(), 1);
    assert_eq!(detail.elements[0].element.id, e1);
    assert_eq!((detail.elements[0].x, detail.elements[0].y), (10, 10));
}

#[tokio::test]
async fn map_entries_must_exist_and_fit() {
    let svc = services(inmem_db().await);
    let admin = ctx_admin();
    let e1 = svc.catalog.create_element(&admin, chair()).await.unwrap();

    let map = |element_id, x| NewMap {
        name: "m".to_owned(),
        thumbnail: "https://cdn.example/m.png".to_owned(),
        dimensions: "50x50".to_owned(),
        default_elements: vec![MapElement { element_id, x, y: 0 }],
    };

    assert!(matches!(
        svc.catalog.create_map(&admin, map(Uuid::now_v7(), 1)).await,
        Err(DomainError::NotFound { entity: "element", .. })
    ));
    assert!(matches!(
        svc.catalog.create_map(&admin, map(e1, 51)).await,
        Err(DomainError::OutOfBounds { .. })
    ));

    let mut bad_dims = map(e1, 1);
    bad_dims.dimensions = "50by50".to_owned();
    assert!(matches!(
        svc.catalog.create_map(&admin, bad_dims).await,
        Err(DomainError::Validation { .. })
    ));
}
