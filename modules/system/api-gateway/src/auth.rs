use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use std::{collections::HashMap, sync::Arc};

use authn_resolver_sdk::{AuthNResolverClient, AuthNResolverError};
use metaverse_security::{Role, SecurityContext};

use crate::route::{RouteAccess, RouteSpec};

/// Route matcher for a specific HTTP method (secured routes with requirements)
#[derive(Clone)]
pub struct RouteMatcher {
    matcher: matchit::Router<RouteRequirement>,
}

/// Route-level requirement registered by an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequirement {
    pub role: Role,
}

impl RouteMatcher {
    fn new() -> Self {
        Self {
            matcher: matchit::Router::new(),
        }
    }

    fn insert(
        &mut self,
        path: &str,
        requirement: RouteRequirement,
    ) -> Result<(), matchit::InsertError> {
        self.matcher.insert(path, requirement)
    }

    fn find(&self, path: &str) -> Option<&RouteRequirement> {
        self.matcher.at(path).ok().map(|m| m.value)
    }
}

/// Matcher for explicitly public or explicitly authenticated routes
#[derive(Clone)]
pub struct PathMatcher {
    matcher: matchit::Router<()>,
}

impl PathMatcher {
    fn new() -> Self {
        Self {
            matcher: matchit::Router::new(),
        }
    }

    fn insert(&mut self, path: &str) -> Result<(), matchit::InsertError> {
        self.matcher.insert(path, ())
    }

    fn find(&self, path: &str) -> bool {
        self.matcher.at(path).is_ok()
    }
}

/// Whether a route requires authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRequirement {
    /// No authentication required (public route).
    None,
    /// Authentication required; a role requirement may apply.
    Required(Option<RouteRequirement>),
}

/// Gateway route policy: resolves `(method, path)` to an [`AuthRequirement`].
#[derive(Clone)]
pub struct GatewayRoutePolicy {
    role_matchers: Arc<HashMap<Method, RouteMatcher>>,
    authenticated_matchers: Arc<HashMap<Method, PathMatcher>>,
    public_matchers: Arc<HashMap<Method, PathMatcher>>,
    require_auth_by_default: bool,
}

impl GatewayRoutePolicy {
    /// Build the policy from route specs.
    ///
    /// # Errors
    ///
    /// Returns an error when two specs register the same method and path.
    pub fn from_specs(
        specs: &[RouteSpec],
        require_auth_by_default: bool,
    ) -> Result<Self, anyhow::Error> {
        let mut role_matchers: HashMap<Method, RouteMatcher> = HashMap::new();
        let mut authenticated_matchers: HashMap<Method, PathMatcher> = HashMap::new();
        let mut public_matchers: HashMap<Method, PathMatcher> = HashMap::new();

        for spec in specs {
            let inserted = match spec.access {
                RouteAccess::Role(role) => role_matchers
                    .entry(spec.method.clone())
                    .or_insert_with(RouteMatcher::new)
                    .insert(&spec.path, RouteRequirement { role }),
                RouteAccess::Authenticated => authenticated_matchers
                    .entry(spec.method.clone())
                    .or_insert_with(PathMatcher::new)
                    .insert(&spec.path),
                RouteAccess::Public => public_matchers
                    .entry(spec.method.clone())
                    .or_insert_with(PathMatcher::new)
                    .insert(&spec.path),
            };
            inserted.map_err(|e| {
                anyhow::anyhow!(
                    "Failed to insert route pattern '{} {}': {e}",
                    spec.method,
                    spec.path
                )
            })?;
        }

        Ok(Self {
            role_matchers: Arc::new(role_matchers),
            authenticated_matchers: Arc::new(authenticated_matchers),
            public_matchers: Arc::new(public_matchers),
            require_auth_by_default,
        })
    }

    /// Resolve the authentication requirement for a given (method, path).
    #[must_use]
    pub fn resolve(&self, method: &Method, path: &str) -> AuthRequirement {
        let requirement = self
            .role_matchers
            .get(method)
            .and_then(|matcher| matcher.find(path))
            .cloned();

        if requirement.is_some() {
            return AuthRequirement::Required(requirement);
        }

        let is_authenticated = self
            .authenticated_matchers
            .get(method)
            .is_some_and(|matcher| matcher.find(path));
        let is_public = self
            .public_matchers
            .get(method)
            .is_some_and(|matcher| matcher.find(path));

        if is_authenticated || (self.require_auth_by_default && !is_public) {
            AuthRequirement::Required(None)
        } else {
            AuthRequirement::None
        }
    }
}

/// Shared state for the authentication middleware.
#[derive(Clone)]
pub struct AuthState {
    pub authn_client: Arc<dyn AuthNResolverClient>,
    pub route_policy: GatewayRoutePolicy,
}

/// Authentication middleware that uses the AuthN Resolver to validate bearer tokens.
///
/// For each request:
/// 1. Skips CORS preflight requests
/// 2. Resolves the route's auth requirement via `GatewayRoutePolicy`
/// 3. For public routes: inserts anonymous `SecurityContext`
/// 4. For required routes: extracts bearer token, calls AuthN Resolver,
///    checks the role requirement, inserts `SecurityContext`
pub async fn authn_middleware(
    axum::extract::State(state): axum::extract::State<AuthState>,
    mut req: axum::extract::Request,
    next: axum::middleware::Next,
) -> Response {
    if is_preflight_request(req.method(), req.headers()) {
        return next.run(req).await;
    }

    let requirement = state.route_policy.resolve(req.method(), req.uri().path());

    match requirement {
        AuthRequirement::None => {
            req.extensions_mut().insert(SecurityContext::anonymous());
            next.run(req).await
        }
        AuthRequirement::Required(role_requirement) => {
            let Some(token) = extract_bearer_token(req.headers()) else {
                return json_error(StatusCode::UNAUTHORIZED, "Unauthorized");
            };

            let ctx = match state.authn_client.authenticate(token).await {
                Ok(result) => result.security_context,
                Err(err) => return authn_error_to_response(err),
            };

            if let Some(required) = role_requirement
                && !ctx.has_role(required.role)
            {
                tracing::debug!(
                    subject_id = %ctx.subject_id(),
                    role = %ctx.role(),
                    required = %required.role,
                    "role requirement not met"
                );
                return json_error(StatusCode::FORBIDDEN, "Forbidden");
            }

            req.extensions_mut().insert(ctx);
            next.run(req).await
        }
    }
}

/// `{"message": ...}` error body shared by the gateway and module handlers.
pub fn json_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "message": message }))).into_response()
}

/// Convert `AuthNResolverError` to an HTTP response.
fn authn_error_to_response(err: AuthNResolverError) -> Response {
    match err {
        AuthNResolverError::Unauthorized(msg) => {
            tracing::debug!("AuthN rejected: {msg}");
            json_error(StatusCode::UNAUTHORIZED, "Unauthorized")
        }
        AuthNResolverError::ServiceUnavailable(msg) => {
            tracing::error!("AuthN service unavailable: {msg}");
            json_error(
                StatusCode::SERVICE_UNAVAILABLE,
                "Authentication service unavailable",
            )
        }
        AuthNResolverError::Internal(msg) => {
            tracing::error!("AuthN internal error: {msg}");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal authentication error",
            )
        }
    }
}

/// Extract Bearer token from Authorization header
fn extract_bearer_token(headers: &axum::http::HeaderMap) -> Option<&str> {
    headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer ").map(str::trim))
        .filter(|t| !t.is_empty())
}

/// Preflight requests are OPTIONS requests carrying `Origin` and
/// `Access-Control-Request-Method`.
fn is_preflight_request(method: &Method, headers: &axum::http::HeaderMap) -> bool {
    method == Method::OPTIONS
        && headers.contains_key(axum::http::header::ORIGIN)
        && headers.contains_key(axum::http::header::ACCESS_CONTROL_REQUEST_METHOD)
}
