//! Token table behind the static identity provider.

use std::collections::HashMap;

use authn_resolver_sdk::AuthenticationResult;
use metaverse_security::{Role, SecurityContext};
use tracing::warn;
use uuid::Uuid;

use crate::config::{AuthnMode, IdentityConfig, StaticAuthnPluginConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Identity {
    subject_id: Uuid,
    role: Role,
}

impl From<&IdentityConfig> for Identity {
    fn from(cfg: &IdentityConfig) -> Self {
        Self {
            subject_id: cfg.subject_id,
            role: cfg.role,
        }
    }
}

/// Maps bearer tokens to identities.
///
/// `accept_all` hands every non-blank token the default identity;
/// `static_tokens` only knows the configured table.
pub struct Service {
    mode: AuthnMode,
    fallback: Identity,
    table: HashMap<String, Identity>,
}

impl Service {
    #[must_use]
    pub fn from_config(cfg: &StaticAuthnPluginConfig) -> Self {
        let mut table = HashMap::with_capacity(cfg.tokens.len());
        for mapping in &cfg.tokens {
            if table
                .insert(mapping.token.clone(), Identity::from(&mapping.identity))
                .is_some()
            {
                warn!("duplicate token in static authn table; last mapping wins");
            }
        }

        Self {
            mode: cfg.mode.clone(),
            fallback: Identity::from(&cfg.default_identity),
            table,
        }
    }

    /// Resolve `bearer_token`, or `None` when it is blank or unknown.
    #[must_use]
    pub fn authenticate(&self, bearer_token: &str) -> Option<AuthenticationResult> {
        if bearer_token.trim().is_empty() {
            return None;
        }

        let identity = match self.mode {
            AuthnMode::AcceptAll => self.fallback,
            AuthnMode::StaticTokens => *self.table.get(bearer_token)?,
        };

        Some(AuthenticationResult {
            security_context: SecurityContext::builder()
                .subject_id(identity.subject_id)
                .role(identity.role)
                .bearer_token(bearer_token)
                .build(),
        })
    }
}
