use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role assigned to a user at signup; never changes afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => f.write_str("Admin"),
            Self::User => f.write_str("User"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct RoleParseError(String);

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            _ => Err(RoleParseError(s.to_owned())),
        }
    }
}

/// Authenticated caller identity, as yielded by the identity provider.
///
/// The anonymous context carries the nil subject; policies treat it as
/// "nobody" and deny every mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SecurityContext {
    subject_id: Uuid,
    role: Role,
    bearer_token: Option<String>,
}

impl SecurityContext {
    #[must_use]
    pub fn builder() -> SecurityContextBuilder {
        SecurityContextBuilder::default()
    }

    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            subject_id: Uuid::nil(),
            role: Role::User,
            bearer_token: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn subject_id(&self) -> Uuid {
        self.subject_id
    }

    #[inline]
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[inline]
    #[must_use]
    pub fn bearer_token(&self) -> Option<&str> {
        self.bearer_token.as_deref()
    }

    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.subject_id.is_nil()
    }

    /// Returns `true` when the subject holds `required` (an admin satisfies any role).
    #[must_use]
    pub fn has_role(&self, required: Role) -> bool {
        !self.is_anonymous() && (self.role == required || self.role == Role::Admin)
    }
}

#[derive(Debug, Default)]
pub struct SecurityContextBuilder {
    subject_id: Option<Uuid>,
    role: Role,
    bearer_token: Option<String>,
}

impl SecurityContextBuilder {
    #[must_use]
    pub fn subject_id(mut self, id: Uuid) -> Self {
        self.subject_id = Some(id);
        self
    }

    #[must_use]
    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    #[must_use]
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    #[must_use]
    pub fn build(self) -> SecurityContext {
        SecurityContext {
            subject_id: self.subject_id.unwrap_or_else(Uuid::nil),
            role: self.role,
            bearer_token: self.bearer_token,
        }
    }
}
