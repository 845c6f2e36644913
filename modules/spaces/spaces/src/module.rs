use std::sync::Arc;

use anyhow::Context as _;
use api_gateway::RouteSpec;
use authz_resolver_sdk::AuthZResolverClient;
use axum::Router;
use metaverse_db::Db;
use metaverse_db::migration_runner::run_migrations;
use spaces_sdk::SpacesClientV1;
use tracing::info;

use crate::api::rest::routes;
use crate::config::SpacesConfig;
use crate::domain::service::{AppServices, Ports};
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::{OrmCatalogRepository, OrmSpacesRepository, OrmUsersRepository};
use crate::local_client::SpacesLocalClient;

/// Wires the spaces module: storage, domain services, REST router and the
/// in-process client.
pub struct SpacesModule {
    services: Arc<AppServices>,
}

impl SpacesModule {
    /// Run the module's migrations and build its services.
    ///
    /// # Errors
    ///
    /// Fails when the migrations cannot be applied.
    pub async fn init(
        db: Db,
        authz: Arc<dyn AuthZResolverClient>,
        cfg: SpacesConfig,
    ) -> anyhow::Result<Self> {
        run_migrations::<Migrator>(&db)
            .await
            .context("spaces migrations failed")?;

        let services = Arc::new(build_services(db, authz, cfg));
        info!("spaces module initialized");
        Ok(Self { services })
    }

    #[must_use]
    pub fn client(&self) -> Arc<dyn SpacesClientV1> {
        Arc::new(SpacesLocalClient::new(Arc::clone(&self.services)))
    }

    /// REST router and route specs, ready to mount on the gateway.
    #[must_use]
    pub fn router(&self) -> (Router, Vec<RouteSpec>) {
        routes::router(Arc::clone(&self.services))
    }
}

pub(crate) fn build_services(
    db: Db,
    authz: Arc<dyn AuthZResolverClient>,
    cfg: SpacesConfig,
) -> AppServices {
    let spaces = Arc::new(OrmSpacesRepository::new(db.clone()));
    let users = Arc::new(OrmUsersRepository::new(db.clone()));
    let catalog = Arc::new(OrmCatalogRepository::new(db));

    let ports = Ports {
        spaces,
        templates: catalog.clone(),
        elements: catalog.clone(),
        avatars: catalog.clone(),
        catalog_admin: catalog,
        users,
    };
    AppServices::new(ports, authz, cfg)
}
