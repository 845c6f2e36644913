//! PEP (Policy Enforcement Point) helpers.
//!
//! - [`compiler::compile_to_access_scope`] - compiles an evaluation response into an `AccessScope`
//! - [`enforcer::PolicyEnforcer`] - build request, call PDP, compile

pub mod compiler;
pub mod enforcer;

pub use compiler::{ConstraintCompileError, compile_to_access_scope};
pub use enforcer::{AccessRequest, EnforcerError, PolicyEnforcer, ResourceType};
