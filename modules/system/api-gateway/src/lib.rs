//! API gateway.
//!
//! Modules hand the gateway an axum [`Router`](axum::Router) together with a
//! [`RouteSpec`] per operation. The gateway builds a [`GatewayRoutePolicy`]
//! from the specs, authenticates callers through the configured
//! [`AuthNResolverClient`](authn_resolver_sdk::AuthNResolverClient), enforces
//! role requirements once at the boundary and inserts the resulting
//! [`SecurityContext`](metaverse_security::SecurityContext) into the request
//! extensions.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod auth;
pub mod config;
pub mod route;
pub mod server;

pub use auth::{AuthRequirement, AuthState, GatewayRoutePolicy, RouteRequirement, authn_middleware};
pub use config::ApiGatewayConfig;
pub use route::{RouteAccess, RouteSpec};
pub use server::ApiGateway;
