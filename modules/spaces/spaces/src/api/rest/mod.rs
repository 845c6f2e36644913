//! REST surface of the spaces module.
//!
//! [`routes::router`] returns the axum router together with the
//! [`RouteSpec`](api_gateway::RouteSpec)s the gateway uses to decide who may
//! call each operation.

pub mod dto;
pub mod error;
mod handlers;
pub mod routes;
