use async_trait::async_trait;
use authn_resolver_sdk::{AuthNResolverClient, AuthNResolverError, AuthenticationResult};

use super::service::Service;

#[async_trait]
impl AuthNResolverClient for Service {
    async fn authenticate(
        &self,
        bearer_token: &str,
    ) -> Result<AuthenticationResult, AuthNResolverError> {
        Service::authenticate(self, bearer_token)
            .ok_or_else(|| AuthNResolverError::Unauthorized("invalid token".to_owned()))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::config::{AuthnMode, StaticAuthnPluginConfig};

    #[tokio::test]
    async fn unknown_token_is_unauthorized() {
        let cfg = StaticAuthnPluginConfig {
            mode: AuthnMode::StaticTokens,
            ..StaticAuthnPluginConfig::default()
        };
        let client: &dyn AuthNResolverClient = &Service::from_config(&cfg);

        let err = client.authenticate("nope").await.unwrap_err();
        assert!(matches!(err, AuthNResolverError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn accepted_token_yields_context() {
        let client: &dyn AuthNResolverClient =
            &Service::from_config(&StaticAuthnPluginConfig::default());

        let res = client.authenticate("dev").await.unwrap();
        assert!(!res.security_context.is_anonymous());
    }
}
