#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod access_scope;
pub mod constants;
pub mod context;

pub use access_scope::{AccessScope, FilterOp, ScopeConstraint, ScopeFilter, properties};
pub use context::{Role, RoleParseError, SecurityContext, SecurityContextBuilder};
