use std::sync::Arc;

use authn_resolver_sdk::AuthNResolverClient;
use tracing::info;

use crate::config::StaticAuthnPluginConfig;
use crate::domain::Service;

/// Static AuthN plugin: registers a token table as the identity provider.
pub struct StaticAuthnPlugin {
    service: Arc<Service>,
}

impl StaticAuthnPlugin {
    #[must_use]
    pub fn init(cfg: &StaticAuthnPluginConfig) -> Self {
        info!(
            mode = ?cfg.mode,
            tokens = cfg.tokens.len(),
            "static authn plugin initialized"
        );
        Self {
            service: Arc::new(Service::from_config(cfg)),
        }
    }

    /// Client handle consumed by the gateway.
    #[must_use]
    pub fn client(&self) -> Arc<dyn AuthNResolverClient> {
        self.service.clone()
    }
}
