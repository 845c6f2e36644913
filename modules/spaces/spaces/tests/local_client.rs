#![allow(clippy::unwrap_used, clippy::expect_used)]

//! In-process client over the same module wiring the server uses.

use std::sync::Arc;

use metaverse_db::{ConnectOpts, connect_db};
use metaverse_security::{Role, SecurityContext};
use spaces::{SpacesConfig, SpacesModule};
use spaces_sdk::{NewSpace, NewSpaceElement, SpacesClientV1, SpacesError};
use static_authz_plugin::StaticAuthzPlugin;
use uuid::Uuid;

fn user(id: u128) -> SecurityContext {
    SecurityContext::builder()
        .subject_id(Uuid::from_u128(id))
        .role(Role::User)
        .build()
}

async fn client() -> Arc<dyn SpacesClientV1> {
    let db = connect_db(
        "sqlite::memory:",
        ConnectOpts {
            max_conns: Some(1),
            min_conns: Some(1),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let authz = StaticAuthzPlugin::init();
    SpacesModule::init(db, authz.client(), SpacesConfig::default())
        .await
        .unwrap()
        .client()
}

fn empty(name: &str) -> NewSpace {
    NewSpace {
        name: name.to_owned(),
        dimensions: "200x150".to_owned(),
        map_id: None,
    }
}

#[tokio::test]
async fn owner_lifecycle_through_client() {
    let client = client().await;
    let alice = user(0xa);
    let bob = user(0xb);

    let id = client.create_space(&alice, empty("Empty")).await.unwrap();

    let detail = client.get_space(&bob, id).await.unwrap();
    assert_eq!((detail.space.width, detail.space.height), (200, 150));
    assert!(detail.elements.is_empty());

    assert_eq!(client.list_spaces(&alice).await.unwrap().len(), 1);
    assert!(client.list_spaces(&bob).await.unwrap().is_empty());

    assert_eq!(
        client.delete_space(&bob, id).await.unwrap_err(),
        SpacesError::Forbidden
    );
    client.delete_space(&alice, id).await.unwrap();
    assert!(matches!(
        client.get_space(&alice, id).await.unwrap_err(),
        SpacesError::NotFound { .. }
    ));
}

#[tokio::test]
async fn errors_map_to_sdk_taxonomy() {
    let client = client().await;
    let alice = user(0xa);

    let err = client
        .create_space(
            &alice,
            NewSpace {
                dimensions: "big".to_owned(),
                ..empty("Bad")
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, SpacesError::Validation { .. }));

    let id = client.create_space(&alice, empty("Room")).await.unwrap();
    let err = client
        .add_element(
            &alice,
            NewSpaceElement {
                space_id: id,
                element_id: Uuid::now_v7(),
                x: 1,
                y: 1,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, SpacesError::NotFound { .. }));

    assert_eq!(
        client
            .delete_element(&alice, Uuid::now_v7())
            .await
            .unwrap_err(),
        SpacesError::Forbidden
    );

    let anonymous = SecurityContext::anonymous();
    assert!(client.list_elements(&anonymous).await.unwrap().is_empty());
    assert!(client.list_avatars(&anonymous).await.unwrap().is_empty());
}

#[tokio::test]
async fn user_metadata_through_client() {
    let client = client().await;
    let alice = user(0xa);

    let me = client.current_user(&alice).await.unwrap();
    assert_eq!(me.id, Uuid::from_u128(0xa));
    assert_eq!(me.role, Role::User);
    assert!(me.avatar_image_url.is_none());

    assert!(matches!(
        client.update_avatar(&alice, Uuid::now_v7()).await.unwrap_err(),
        SpacesError::Validation { .. }
    ));
    assert!(
        client
            .user_avatars(&alice, vec![me.id])
            .await
            .unwrap()
            .is_empty()
    );
}
