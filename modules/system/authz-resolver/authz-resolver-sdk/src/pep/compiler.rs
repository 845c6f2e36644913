//! PEP constraint compiler.
//!
//! Compiles PDP evaluation responses into `AccessScope` for scoped queries.
//!
//! ## Decision Matrix (fail-closed)
//!
//! | decision | `require_constraints` | constraints | Result |
//! |----------|-------------------|-------------|--------|
//! | false    | *                 | *           | Denied |
//! | true     | false             | *           | `allow_all()` |
//! | true     | true              | empty       | `allow_all()` (unrestricted) |
//! | true     | true              | present     | Compile constraints → `AccessScope` |
//!
//! A constraint naming a property outside `supported_properties` is dropped
//! (fail-closed for that access path).

use metaverse_security::access_scope::{FilterOp, ScopeConstraint, ScopeFilter};
use metaverse_security::AccessScope;

use crate::constraints::{Constraint, Predicate};
use crate::models::EvaluationResponse;

/// Error during constraint compilation.
#[derive(Debug, thiserror::Error)]
pub enum ConstraintCompileError {
    /// The PDP explicitly denied access.
    #[error("access denied by PDP")]
    Denied { reason: Option<String> },

    /// Every constraint referenced an unsupported property (fail-closed).
    #[error("all constraints failed compilation (fail-closed): {reason}")]
    AllConstraintsFailed { reason: String },
}

/// Compile an evaluation response into an `AccessScope`.
///
/// Constraints keep their OR-of-AND shape: each compiled constraint becomes
/// one [`ScopeConstraint`] whose filters are `ANDed`.
///
/// # Errors
///
/// - `Denied` if `decision` is `false`
/// - `AllConstraintsFailed` if no constraint could be compiled
pub fn compile_to_access_scope(
    response: &EvaluationResponse,
    require_constraints: bool,
    supported_properties: &[&str],
) -> Result<AccessScope, ConstraintCompileError> {
    if !response.decision {
        return Err(ConstraintCompileError::Denied {
            reason: response.deny_reason.clone(),
        });
    }

    if !require_constraints || response.constraints.is_empty() {
        return Ok(AccessScope::allow_all());
    }

    let mut compiled = Vec::with_capacity(response.constraints.len());
    let mut fail_reasons = Vec::new();

    for constraint in &response.constraints {
        match compile_constraint(constraint, supported_properties) {
            Ok(c) => compiled.push(c),
            Err(reason) => fail_reasons.push(reason),
        }
    }

    if compiled.is_empty() {
        return Err(ConstraintCompileError::AllConstraintsFailed {
            reason: fail_reasons.join("; "),
        });
    }

    Ok(AccessScope::from_constraints(compiled))
}

fn compile_constraint(
    constraint: &Constraint,
    supported_properties: &[&str],
) -> Result<ScopeConstraint, String> {
    let mut filters = Vec::with_capacity(constraint.predicates.len());

    for predicate in &constraint.predicates {
        let property = predicate.property();
        if !supported_properties.contains(&property) {
            return Err(format!("unsupported property `{property}`"));
        }
        let values = match predicate {
            Predicate::Eq(eq) => vec![eq.value],
            Predicate::In(in_pred) => in_pred.values.clone(),
        };
        filters.push(ScopeFilter::new(property, FilterOp::In, values));
    }

    Ok(ScopeConstraint::new(filters))
}
