use std::sync::Arc;

use authz_resolver_sdk::AuthZResolverClient;
use tracing::info;

use crate::domain::Service;

/// Static AuthZ plugin: serves the ownership policy as the PDP.
pub struct StaticAuthzPlugin {
    service: Arc<Service>,
}

impl StaticAuthzPlugin {
    #[must_use]
    pub fn init() -> Self {
        info!("static authz plugin initialized");
        Self {
            service: Arc::new(Service),
        }
    }

    #[must_use]
    pub fn client(&self) -> Arc<dyn AuthZResolverClient> {
        self.service.clone()
    }
}
