use std::path::Path;

use anyhow::{Context as _, bail};
use api_gateway::ApiGatewayConfig;
use figment::Figment;
use figment::providers::{Env, Format as _, Yaml};
use metaverse_db::ConnectOpts;
use serde::Deserialize;
use spaces::SpacesConfig;
use static_authn_plugin::config::StaticAuthnPluginConfig;

/// Environment variables with this prefix override file values; nested keys
/// are separated by `__` (`METAVERSE__SERVER__BIND_ADDR`).
pub const ENV_PREFIX: &str = "METAVERSE__";

/// Top-level server configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ApiGatewayConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub spaces: SpacesConfig,
    pub authn: StaticAuthnPluginConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool: ConnectOpts,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://metaverse.db?mode=rwc".to_owned(),
            pool: ConnectOpts::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence when set.
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load defaults, then the YAML file (if any), then `METAVERSE__*` env vars.
    ///
    /// # Errors
    ///
    /// Fails when the file is missing or any layer does not match the schema.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::new();
        if let Some(path) = path {
            if !path.is_file() {
                bail!("config file '{}' not found", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));
        Self::from_figment(&figment)
    }

    /// # Errors
    ///
    /// Fails when the merged layers do not match the schema.
    pub fn from_figment(figment: &Figment) -> anyhow::Result<Self> {
        figment.extract().context("invalid configuration")
    }
}
