//! Policy Enforcement Point (`PEP`) object.
//!
//! [`PolicyEnforcer`] encapsulates the full PEP flow:
//! build evaluation request → call PDP → compile constraints to `AccessScope`.
//!
//! Constructed once during service initialisation with the `AuthZ` client.
//! The resource type is supplied per call via a [`ResourceType`] descriptor,
//! so a single enforcer can serve all resource types in a service.

use std::collections::HashMap;
use std::sync::Arc;

use metaverse_security::{AccessScope, SecurityContext};
use tracing::debug;
use uuid::Uuid;

use crate::api::AuthZResolverClient;
use crate::error::AuthZResolverError;
use crate::models::{Action, Context, EvaluationRequest, Resource, Subject};
use crate::pep::compiler::{ConstraintCompileError, compile_to_access_scope};

/// Error from the PEP enforcement flow.
#[derive(Debug, thiserror::Error)]
pub enum EnforcerError {
    /// The `AuthZ` evaluation call failed.
    #[error("authorization evaluation failed: {0}")]
    EvaluationFailed(#[from] AuthZResolverError),

    /// Constraint compilation failed (denied or unsupported).
    #[error("constraint compilation failed: {0}")]
    CompileFailed(#[from] ConstraintCompileError),
}

impl EnforcerError {
    /// `true` when the PDP said no (as opposed to failing to answer).
    #[must_use]
    pub fn is_denied(&self) -> bool {
        matches!(self, Self::CompileFailed(_))
    }
}

/// Per-request evaluation parameters.
///
/// Used with [`PolicyEnforcer::access_scope_with()`] and
/// [`PolicyEnforcer::check_access_with()`] to hand prefetched resource
/// attributes to the PDP.
///
/// ```ignore
/// enforcer.check_access_with(
///     &ctx, &SPACE, "delete", Some(space_id),
///     &AccessRequest::new().resource_property(properties::OWNER_ID, owner_id.to_string()),
/// ).await?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct AccessRequest {
    resource_properties: HashMap<String, serde_json::Value>,
}

impl AccessRequest {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single resource property for ABAC evaluation.
    #[must_use]
    pub fn resource_property(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.resource_properties.insert(key.into(), value.into());
        self
    }
}

/// Static descriptor for a resource type and its supported constraint properties.
#[derive(Debug, Clone, Copy)]
pub struct ResourceType {
    /// Dotted resource type name (e.g. `"spaces.space"`).
    pub name: &'static str,
    /// Properties the PEP can compile from PDP constraints.
    pub supported_properties: &'static [&'static str],
}

/// Policy Enforcement Point.
///
/// Cloneable and cheap to pass around (`Arc` inside).
///
/// ```ignore
/// const SPACE: ResourceType = ResourceType {
///     name: "spaces.space",
///     supported_properties: &["owner_id", "id"],
/// };
///
/// let enforcer = PolicyEnforcer::new(authz.clone());
/// let scope = enforcer.access_scope(&ctx, &SPACE, "list", None).await?;
/// ```
#[derive(Clone)]
pub struct PolicyEnforcer {
    authz: Arc<dyn AuthZResolverClient>,
}

impl PolicyEnforcer {
    pub fn new(authz: Arc<dyn AuthZResolverClient>) -> Self {
        Self { authz }
    }

    // ── Low-level: build request only ────────────────────────────────

    #[must_use]
    pub fn build_request(
        &self,
        ctx: &SecurityContext,
        resource: &ResourceType,
        action: &str,
        resource_id: Option<Uuid>,
        require_constraints: bool,
    ) -> EvaluationRequest {
        self.build_request_with(
            ctx,
            resource,
            action,
            resource_id,
            require_constraints,
            &AccessRequest::default(),
        )
    }

    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn build_request_with(
        &self,
        ctx: &SecurityContext,
        resource: &ResourceType,
        action: &str,
        resource_id: Option<Uuid>,
        require_constraints: bool,
        request: &AccessRequest,
    ) -> EvaluationRequest {
        EvaluationRequest {
            subject: Subject {
                id: ctx.subject_id(),
                role: ctx.role(),
            },
            action: Action {
                name: action.to_owned(),
            },
            resource: Resource {
                resource_type: resource.name.to_owned(),
                id: resource_id,
                properties: request.resource_properties.clone(),
            },
            context: Context {
                require_constraints,
                supported_properties: resource
                    .supported_properties
                    .iter()
                    .map(|s| (*s).to_owned())
                    .collect(),
            },
        }
    }

    // ── High-level: full PEP flow ───────────────────────────────────

    /// Build request → evaluate → compile constraints to `AccessScope`.
    ///
    /// # Errors
    ///
    /// - [`EnforcerError::EvaluationFailed`] if the PDP call fails
    /// - [`EnforcerError::CompileFailed`] if the PDP denies or constraints cannot be compiled
    pub async fn access_scope(
        &self,
        ctx: &SecurityContext,
        resource: &ResourceType,
        action: &str,
        resource_id: Option<Uuid>,
    ) -> Result<AccessScope, EnforcerError> {
        self.access_scope_with(
            ctx,
            resource,
            action,
            resource_id,
            &AccessRequest::default(),
        )
        .await
    }

    /// Same as [`Self::access_scope`] with per-request overrides.
    ///
    /// # Errors
    ///
    /// See [`Self::access_scope`].
    pub async fn access_scope_with(
        &self,
        ctx: &SecurityContext,
        resource: &ResourceType,
        action: &str,
        resource_id: Option<Uuid>,
        request: &AccessRequest,
    ) -> Result<AccessScope, EnforcerError> {
        let eval_request =
            self.build_request_with(ctx, resource, action, resource_id, true, request);
        let response = self.authz.evaluate(eval_request).await?;
        Ok(compile_to_access_scope(
            &response,
            true,
            resource.supported_properties,
        )?)
    }

    /// Decision-only flow for point operations: allow or deny, no row filter.
    ///
    /// # Errors
    ///
    /// - [`EnforcerError::EvaluationFailed`] if the PDP call fails
    /// - [`EnforcerError::CompileFailed`] if the PDP denies
    pub async fn check_access_with(
        &self,
        ctx: &SecurityContext,
        resource: &ResourceType,
        action: &str,
        resource_id: Option<Uuid>,
        request: &AccessRequest,
    ) -> Result<(), EnforcerError> {
        let eval_request =
            self.build_request_with(ctx, resource, action, resource_id, false, request);
        let response = self.authz.evaluate(eval_request).await?;
        if !response.decision {
            debug!(
                resource_type = resource.name,
                action,
                reason = ?response.deny_reason,
                "access denied"
            );
        }
        compile_to_access_scope(&response, false, resource.supported_properties)?;
        Ok(())
    }
}

impl std::fmt::Debug for PolicyEnforcer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolicyEnforcer").finish_non_exhaustive()
    }
}
