use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context as _;
use authn_resolver_sdk::AuthNResolverClient;
use axum::Router;
use axum::routing::get;
use http::Method;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::auth::{AuthState, GatewayRoutePolicy, authn_middleware};
use crate::config::ApiGatewayConfig;
use crate::route::RouteSpec;

/// Collects module routers and serves them behind the auth middleware.
pub struct ApiGateway {
    cfg: ApiGatewayConfig,
    authn_client: Arc<dyn AuthNResolverClient>,
    router: Router,
    specs: Vec<RouteSpec>,
}

impl ApiGateway {
    #[must_use]
    pub fn new(cfg: ApiGatewayConfig, authn_client: Arc<dyn AuthNResolverClient>) -> Self {
        Self {
            cfg,
            authn_client,
            router: Router::new().route("/health", get(health)),
            specs: vec![RouteSpec::public(Method::GET, "/health")],
        }
    }

    /// Mount a module router together with the specs of its operations.
    #[must_use]
    pub fn mount(mut self, router: Router, specs: Vec<RouteSpec>) -> Self {
        self.router = self.router.merge(router);
        self.specs.extend(specs);
        self
    }

    /// Final router with auth, tracing, request-id and timeout layers.
    ///
    /// # Errors
    ///
    /// Returns an error when the route policy cannot be built.
    pub fn build_router(self) -> anyhow::Result<Router> {
        let route_policy =
            GatewayRoutePolicy::from_specs(&self.specs, self.cfg.require_auth_by_default)?;
        let state = AuthState {
            authn_client: self.authn_client,
            route_policy,
        };

        let mut router = self
            .router
            .layer(axum::middleware::from_fn_with_state(state, authn_middleware));

        if self.cfg.request_timeout_secs > 0 {
            router = router.layer(TimeoutLayer::new(Duration::from_secs(
                self.cfg.request_timeout_secs,
            )));
        }
        if self.cfg.cors_enabled {
            router = router.layer(CorsLayer::permissive());
        }

        Ok(router
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid)))
    }

    /// Bind and serve until `cancel` fires.
    ///
    /// # Errors
    ///
    /// Returns an error if the bind address is invalid, the socket cannot be
    /// bound or the server fails.
    pub async fn serve(self, cancel: CancellationToken) -> anyhow::Result<()> {
        let addr: SocketAddr = self
            .cfg
            .bind_addr
            .parse()
            .with_context(|| format!("invalid bind address '{}'", self.cfg.bind_addr))?;
        let router = self.build_router()?;

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        info!(%addr, "api gateway listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(cancel.cancelled_owned())
            .await
            .context("http server failed")?;

        info!("api gateway stopped");
        Ok(())
    }
}

async fn health() -> &'static str {
    "ok"
}
