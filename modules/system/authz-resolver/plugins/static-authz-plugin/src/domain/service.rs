//! Service implementation for the static `AuthZ` resolver plugin.

use authz_resolver_sdk::{Constraint, EvaluationRequest, EvaluationResponse, Predicate};
use metaverse_security::properties;
use tracing::debug;
use uuid::Uuid;

/// Readable by anyone, anonymous included.
const PUBLIC_ACTIONS: &[&str] = &["get"];

/// Allowed for any authenticated subject; there is no resource yet.
const CREATE_ACTIONS: &[&str] = &["create"];

/// Always answered with an `owner_id IN [subject]` constraint.
const LIST_ACTIONS: &[&str] = &["list"];

/// Static `AuthZ` resolver service with a fixed ownership policy:
/// - public actions are allowed for everyone, unconstrained
/// - anonymous (nil) subjects are denied everything else
/// - create actions are allowed for any authenticated subject
/// - list actions are allowed with `owner_id IN [subject]`
/// - every other action is allowed only when the request carries the
///   resource property `owner_id` equal to the subject id
#[derive(Debug, Default, Clone, Copy)]
pub struct Service;

impl Service {
    /// Decide one authorization request.
    #[must_use]
    pub fn decide(request: &EvaluationRequest) -> EvaluationResponse {
        let action = request.action.name.as_str();
        let subject = request.subject.id;

        if is_in(PUBLIC_ACTIONS, action) {
            return EvaluationResponse::allow();
        }
        if subject.is_nil() {
            return EvaluationResponse::deny("anonymous subject");
        }

        let response = evaluate_ownership(request, action, subject);
        if !response.decision {
            debug!(
                action,
                resource_type = %request.resource.resource_type,
                resource_id = ?request.resource.id,
                "ownership policy denied"
            );
        }
        response
    }
}

fn evaluate_ownership(
    request: &EvaluationRequest,
    action: &str,
    subject: Uuid,
) -> EvaluationResponse {
    if is_in(CREATE_ACTIONS, action) {
        return EvaluationResponse::allow();
    }

    // Constrained even when the caller did not ask for constraints.
    if is_in(LIST_ACTIONS, action) {
        return EvaluationResponse::allow_with(vec![Constraint {
            predicates: vec![Predicate::in_values(properties::OWNER_ID, vec![subject])],
        }]);
    }

    match owner_property(request) {
        Some(owner) if owner == subject => EvaluationResponse::allow(),
        Some(_) => EvaluationResponse::deny("subject does not own the resource"),
        None => EvaluationResponse::deny("resource owner unknown"),
    }
}

fn is_in(actions: &[&str], action: &str) -> bool {
    actions.contains(&action)
}

fn owner_property(request: &EvaluationRequest) -> Option<Uuid> {
    request
        .resource
        .properties
        .get(properties::OWNER_ID)
        .and_then(serde_json::Value::as_str)
        .and_then(|s| Uuid::parse_str(s).ok())
}
