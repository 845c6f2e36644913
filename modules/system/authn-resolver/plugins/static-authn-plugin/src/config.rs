use serde::Deserialize;
use uuid::Uuid;

use metaverse_security::Role;
use metaverse_security::constants::DEFAULT_SUBJECT_ID;

/// How bearer tokens are mapped to identities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthnMode {
    /// Any non-empty token maps to `default_identity`.
    #[default]
    AcceptAll,
    /// Only tokens listed in `tokens` are accepted.
    StaticTokens,
}

/// Plugin configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticAuthnPluginConfig {
    pub mode: AuthnMode,

    /// Identity returned in `accept_all` mode.
    pub default_identity: IdentityConfig,

    /// Token table used in `static_tokens` mode.
    pub tokens: Vec<TokenMapping>,
}

/// Identity yielded for a token.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IdentityConfig {
    pub subject_id: Uuid,
    pub role: Role,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            subject_id: DEFAULT_SUBJECT_ID,
            role: Role::User,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenMapping {
    pub token: String,
    pub identity: IdentityConfig,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn empty_config_accepts_all_with_default_identity() {
        let parsed: Result<StaticAuthnPluginConfig, _> = serde_saphyr::from_str("{}");
        let cfg = match parsed {
            Ok(cfg) => cfg,
            Err(e) => panic!("failed to parse config: {e}"),
        };

        assert_eq!(cfg.mode, AuthnMode::AcceptAll);
        assert_eq!(cfg.default_identity.subject_id, DEFAULT_SUBJECT_ID);
        assert_eq!(cfg.default_identity.role, Role::User);
        assert!(cfg.tokens.is_empty());
    }

    #[test]
    fn static_tokens_are_parsed() {
        let yaml = r#"
mode: static_tokens
tokens:
  - token: "admin-token"
    identity:
      subject_id: "00000000-0000-0000-0000-0000000000aa"
      role: admin
  - token: "user-token"
    identity:
      subject_id: "00000000-0000-0000-0000-0000000000bb"
"#;

        let parsed: Result<StaticAuthnPluginConfig, _> = serde_saphyr::from_str(yaml);
        let cfg = match parsed {
            Ok(cfg) => cfg,
            Err(e) => panic!("failed to parse config: {e}"),
        };

        assert_eq!(cfg.mode, AuthnMode::StaticTokens);
        assert_eq!(cfg.tokens.len(), 2);
        assert_eq!(cfg.tokens[0].identity.role, Role::Admin);
        assert_eq!(cfg.tokens[1].identity.role, Role::User);
    }

    #[test]
    fn config_rejects_unknown_fields() {
        let yaml = r#"
mode: accept_all
issuer: "someone"
"#;

        let parsed: Result<StaticAuthnPluginConfig, _> = serde_saphyr::from_str(yaml);
        assert!(parsed.is_err());
    }
}
