use http::Method;
use metaverse_security::Role;

/// Who may call a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// No authentication; handlers receive an anonymous context.
    Public,
    /// Any authenticated caller.
    Authenticated,
    /// Authenticated caller holding the role.
    Role(Role),
}

/// One operation exposed by a module router.
///
/// `path` uses axum 0.8 / matchit syntax (`/space/{spaceId}`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSpec {
    pub method: Method,
    pub path: String,
    pub access: RouteAccess,
}

impl RouteSpec {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>, access: RouteAccess) -> Self {
        Self {
            method,
            path: path.into(),
            access,
        }
    }

    #[must_use]
    pub fn public(method: Method, path: impl Into<String>) -> Self {
        Self::new(method, path, RouteAccess::Public)
    }

    #[must_use]
    pub fn authenticated(method: Method, path: impl Into<String>) -> Self {
        Self::new(method, path, RouteAccess::Authenticated)
    }

    #[must_use]
    pub fn role(method: Method, path: impl Into<String>, role: Role) -> Self {
        Self::new(method, path, RouteAccess::Role(role))
    }
}
