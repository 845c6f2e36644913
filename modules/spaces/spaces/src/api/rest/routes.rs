use std::sync::Arc;

use api_gateway::RouteSpec;
use axum::Router;
use axum::routing::{get, post, put};
use http::Method;
use metaverse_security::Role;

use super::handlers;
use crate::domain::service::AppServices;

const SPACE: &str = "/api/v1/space";
const SPACE_ELEMENT: &str = "/api/v1/space/element";
const SPACE_ALL: &str = "/api/v1/space/all";
const SPACE_BY_ID: &str = "/api/v1/space/{spaceId}";
const ELEMENTS: &str = "/api/v1/elements";
const AVATARS: &str = "/api/v1/avatars";
const USER_METADATA: &str = "/api/v1/user/metadata";
const USER_METADATA_BULK: &str = "/api/v1/user/metadata/bulk";
const CURRENT_USER: &str = "/api/v1/user/currentUser";
const ADMIN_ELEMENT: &str = "/api/v1/admin/element";
const ADMIN_ELEMENT_BY_ID: &str = "/api/v1/admin/element/{elementId}";
const ADMIN_AVATAR: &str = "/api/v1/admin/avatar";
const ADMIN_MAP: &str = "/api/v1/admin/map";

/// Module router plus the access rule of every operation it serves.
#[must_use]
pub fn router(services: Arc<AppServices>) -> (Router, Vec<RouteSpec>) {
    let router = Router::new()
        .route(SPACE, post(handlers::create_space))
        .route(
            SPACE_ELEMENT,
            post(handlers::add_element).delete(handlers::delete_element),
        )
        .route(SPACE_ALL, get(handlers::list_spaces))
        .route(
            SPACE_BY_ID,
            get(handlers::get_space).delete(handlers::delete_space),
        )
        .route(ELEMENTS, get(handlers::list_elements))
        .route(AVATARS, get(handlers::list_avatars))
        .route(USER_METADATA, post(handlers::update_metadata))
        .route(USER_METADATA_BULK, get(handlers::bulk_metadata))
        .route(CURRENT_USER, get(handlers::current_user))
        .route(ADMIN_ELEMENT, post(handlers::create_element))
        .route(ADMIN_ELEMENT_BY_ID, put(handlers::update_element))
        .route(ADMIN_AVATAR, post(handlers::create_avatar))
        .route(ADMIN_MAP, post(handlers::create_map))
        .with_state(services);

    let specs = vec![
        RouteSpec::authenticated(Method::POST, SPACE),
        RouteSpec::authenticated(Method::POST, SPACE_ELEMENT),
        RouteSpec::authenticated(Method::DELETE, SPACE_ELEMENT),
        RouteSpec::authenticated(Method::GET, SPACE_ALL),
        RouteSpec::public(Method::GET, SPACE_BY_ID),
        RouteSpec::authenticated(Method::DELETE, SPACE_BY_ID),
        RouteSpec::public(Method::GET, ELEMENTS),
        RouteSpec::public(Method::GET, AVATARS),
        RouteSpec::authenticated(Method::POST, USER_METADATA),
        RouteSpec::public(Method::GET, USER_METADATA_BULK),
        RouteSpec::authenticated(Method::GET, CURRENT_USER),
        RouteSpec::role(Method::POST, ADMIN_ELEMENT, Role::Admin),
        RouteSpec::role(Method::PUT, ADMIN_ELEMENT_BY_ID, Role::Admin),
        RouteSpec::role(Method::POST, ADMIN_AVATAR, Role::Admin),
        RouteSpec::role(Method::POST, ADMIN_MAP, Role::Admin),
    ];

    (router, specs)
}
