//! AuthZ Resolver SDK
//!
//! - [`AuthZResolverClient`] - PDP trait consumed by modules acting as PEPs
//! - [`EvaluationRequest`], [`EvaluationResponse`] - evaluation models
//! - [`Constraint`], [`Predicate`] - constraint types
//! - [`AuthZResolverError`] - error types
//! - [`pep`] - PEP helpers (compiler, enforcer)
//!
//! ## Usage
//!
//! ```ignore
//! use authz_resolver_sdk::pep::{PolicyEnforcer, ResourceType};
//!
//! let enforcer = PolicyEnforcer::new(authz.clone());
//! let scope = enforcer.access_scope(&ctx, &SPACE, "list", None).await?;
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod constraints;
pub mod error;
pub mod models;
pub mod pep;

pub use api::AuthZResolverClient;
pub use constraints::{Constraint, EqPredicate, InPredicate, Predicate};
pub use error::AuthZResolverError;
pub use models::{Action, Context, EvaluationRequest, EvaluationResponse, Resource, Subject};
