#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use async_trait::async_trait;
use authz_resolver_sdk::{AuthZResolverClient, AuthZResolverError, EvaluationRequest, EvaluationResponse};
use metaverse_db::migration_runner::run_migrations;
use metaverse_db::{ConnectOpts, Db, connect_db};
use metaverse_security::{Role, SecurityContext};
use sea_orm::{EntityTrait, Set};
use static_authz_plugin::StaticAuthzPlugin;
use uuid::Uuid;

use crate::config::SpacesConfig;
use crate::domain::service::AppServices;
use crate::infra::storage::entity::{element, map, map_element};
use crate::infra::storage::migrations::Migrator;
use crate::module::build_services;

pub const USER_A: Uuid = Uuid::from_u128(0xa);
pub const USER_B: Uuid = Uuid::from_u128(0xb);
pub const ADMIN: Uuid = Uuid::from_u128(0xad);

#[must_use]
pub fn ctx_user(id: Uuid) -> SecurityContext {
    SecurityContext::builder().subject_id(id).role(Role::User).build()
}

#[must_use]
pub fn ctx_admin() -> SecurityContext {
    SecurityContext::builder().subject_id(ADMIN).role(Role::Admin).build()
}

/// Create an in-memory database with the module schema applied.
pub async fn inmem_db() -> Db {
    let opts = ConnectOpts {
        max_conns: Some(1),
        min_conns: Some(1),
        ..Default::default()
    };
    let db = connect_db("sqlite::memory:", opts)
        .await
        .expect("Failed to connect to in-memory database");

    run_migrations::<Migrator>(&db)
        .await
        .expect("Failed to run migrations");

    db
}

/// The static PDP with its default ownership policy.
#[must_use]
pub fn ownership_pdp() -> Arc<dyn AuthZResolverClient> {
    StaticAuthzPlugin::init().client()
}

/// PDP that is down.
pub struct UnavailablePdp;

#[async_trait]
impl AuthZResolverClient for UnavailablePdp {
    async fn evaluate(
        &self,
        _request: EvaluationRequest,
    ) -> Result<EvaluationResponse, AuthZResolverError> {
        Err(AuthZResolverError::ServiceUnavailable("pdp offline".to_owned()))
    }
}

/// PDP that allows every request without constraints.
pub struct PermissivePdp;

#[async_trait]
impl AuthZResolverClient for PermissivePdp {
    async fn evaluate(
        &self,
        _request: EvaluationRequest,
    ) -> Result<EvaluationResponse, AuthZResolverError> {
        Ok(EvaluationResponse::allow())
    }
}

pub fn services(db: Db) -> AppServices {
    build_services(db, ownership_pdp(), SpacesConfig::default())
}

pub async fn seed_element(db: &Db, id: Uuid, width: i32, height: i32) {
    let am = element::ActiveModel {
        id: Set(id),
        image_url: Set(format!("https://cdn.example/{id}.png")),
        width: Set(width),
        height: Set(height),
        is_static: Set(true),
    };
    element::Entity::insert(am)
        .exec_without_returning(db.conn())
        .await
        .expect("Failed to seed element");
}

/// Seed a map template; `entries` are `(element_id, x, y)` in template order.
pub async fn seed_map(db: &Db, id: Uuid, name: &str, width: i32, height: i32, entries: &[(Uuid, i32, i32)]) {
    let am = map::ActiveModel {
        id: Set(id),
        name: Set(name.to_owned()),
        thumbnail: Set("https://cdn.example/map.png".to_owned()),
        width: Set(width),
        height: Set(height),
    };
    map::Entity::insert(am)
        .exec_without_returning(db.conn())
        .await
        .expect("Failed to seed map");

    for (position, (element_id, x, y)) in (0_i32..).zip(entries.iter().copied()) {
        let entry = map_element::ActiveModel {
            id: Set(Uuid::now_v7()),
            map_id: Set(id),
            element_id: Set(element_id),
            x: Set(x),
            y: Set(y),
            position: Set(position),
        };
        map_element::Entity::insert(entry)
            .exec_without_returning(db.conn())
            .await
            .expect("Failed to seed map element");
    }
}
