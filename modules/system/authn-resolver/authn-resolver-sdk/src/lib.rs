//! AuthN Resolver SDK
//!
//! - [`AuthNResolverClient`] - identity provider trait consumed by the gateway
//! - [`AuthenticationResult`] - authentication result model
//! - [`AuthNResolverError`] - error types
//!
//! ## Usage
//!
//! ```ignore
//! use authn_resolver_sdk::AuthNResolverClient;
//!
//! let result = authn.authenticate("xyz...").await?;
//! let security_context = result.security_context;
//! ```

pub mod api;
pub mod error;
pub mod models;

pub use api::AuthNResolverClient;
pub use error::AuthNResolverError;
pub use models::AuthenticationResult;
