//! Evaluation models: Subject + Action + Resource + Context.

use std::collections::HashMap;

use metaverse_security::Role;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constraints::Constraint;

/// Authorization evaluation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub subject: Subject,
    pub action: Action,
    pub resource: Resource,
    pub context: Context,
}

/// The authenticated subject making the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    /// Subject identifier; nil for anonymous callers.
    pub id: Uuid,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    /// Action name (e.g., "list", "get", "create", "delete").
    pub name: String,
}

/// The resource being accessed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    /// Resource type identifier (e.g., "`spaces.space`").
    pub resource_type: String,
    /// Specific resource ID for point operations.
    pub id: Option<Uuid>,
    /// Prefetched attributes (e.g. `owner_id`) for ABAC decisions.
    #[serde(default)]
    pub properties: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Context {
    /// Whether the PDP should return row-level constraints.
    pub require_constraints: bool,
    /// Properties the PEP can compile into SQL filters.
    #[serde(default)]
    pub supported_properties: Vec<String>,
}

/// Authorization evaluation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResponse {
    pub decision: bool,
    /// Row-level constraints to apply when `decision` is `true`.
    /// Multiple constraints are `ORed`.
    #[serde(default)]
    pub constraints: Vec<Constraint>,
    #[serde(default)]
    pub deny_reason: Option<String>,
}

impl EvaluationResponse {
    #[must_use]
    pub fn allow() -> Self {
        Self {
            decision: true,
            constraints: Vec::new(),
            deny_reason: None,
        }
    }

    #[must_use]
    pub fn allow_with(constraints: Vec<Constraint>) -> Self {
        Self {
            decision: true,
            constraints,
            deny_reason: None,
        }
    }

    #[must_use]
    pub fn deny(reason: impl Into<String>) -> Self {
        Self {
            decision: false,
            constraints: Vec::new(),
            deny_reason: Some(reason.into()),
        }
    }
}
