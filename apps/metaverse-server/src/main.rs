//! Metaverse spaces server.
//!
//! Wires the static identity and policy plugins, the spaces module and the
//! API gateway, then serves until Ctrl-C.

use std::path::PathBuf;

use anyhow::Context as _;
use api_gateway::ApiGateway;
use clap::Parser;
use metaverse_db::connect_db;
use spaces::SpacesModule;
use static_authn_plugin::StaticAuthnPlugin;
use static_authz_plugin::StaticAuthzPlugin;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;

use config::{AppConfig, LoggingConfig};

#[derive(Parser, Debug)]
#[command(name = "metaverse-server", version, about = "Metaverse spaces server")]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the effective configuration and exit.
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = AppConfig::load(cli.config.as_deref())?;

    if cli.print_config {
        println!("{cfg:#?}");
        return Ok(());
    }

    init_tracing(&cfg.logging)?;
    run(cfg).await
}

fn init_tracing(cfg: &LoggingConfig) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&cfg.level)
            .with_context(|| format!("invalid log level '{}'", cfg.level))?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = if cfg.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    info!(version = env!("CARGO_PKG_VERSION"), "starting metaverse server");

    let db = connect_db(&cfg.database.url, cfg.database.pool)
        .await
        .context("failed to connect to the database")?;

    let authn = StaticAuthnPlugin::init(&cfg.authn);
    let authz = StaticAuthzPlugin::init();

    let spaces = SpacesModule::init(db, authz.client(), cfg.spaces).await?;
    let (router, specs) = spaces.router();

    let gateway = ApiGateway::new(cfg.server, authn.client()).mount(router, specs);

    let cancel = CancellationToken::new();
    let shutdown = cancel.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("shutdown requested"),
            Err(e) => warn!(error = %e, "failed to listen for Ctrl-C, shutting down"),
        }
        shutdown.cancel();
    });

    gateway.serve(cancel).await
}
