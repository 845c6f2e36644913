use serde::Deserialize;

/// API gateway configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiGatewayConfig {
    /// Socket address the HTTP server binds to.
    pub bind_addr: String,

    /// Routes not declared public require a bearer token.
    pub require_auth_by_default: bool,

    /// Enable a permissive CORS layer.
    pub cors_enabled: bool,

    /// Per-request timeout; `0` disables it.
    pub request_timeout_secs: u64,
}

impl Default for ApiGatewayConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_owned(),
            require_auth_by_default: true,
            cors_enabled: false,
            request_timeout_secs: 30,
        }
    }
}
