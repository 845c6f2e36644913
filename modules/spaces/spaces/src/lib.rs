//! Spaces module.
//!
//! Layout:
//! - `domain` - services, repository traits, placement rules
//! - `infra::storage` - `SeaORM` entities, migrations and repositories
//! - `api::rest` - DTOs, handlers and route registration
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod config;
pub mod domain;
pub mod infra;
pub mod local_client;
pub mod module;

#[cfg(test)]
pub mod test_support;

pub use config::SpacesConfig;
pub use module::SpacesModule;
