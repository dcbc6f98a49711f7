//! admission-form server
//!
//! ```bash
//! admission-form --config ./config.toml --port 8080
//! ```

use std::path::PathBuf;

use admission_form::{config::AdmissionConfig, handlers, observability, state::AppState};
use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(name = "admission-form")]
#[command(version)]
#[command(about = "Higher secondary admission registration form", long_about = None)]
struct Cli {
    /// Config file to load instead of the standard locations
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Interface to bind, overrides configuration
    #[arg(long)]
    host: Option<String>,

    /// Port to bind, overrides configuration
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => AdmissionConfig::load_from(path)?,
        None => AdmissionConfig::load()?,
    };
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    observability::init(&config.logging)?;

    tracing::info!(
        title = %config.form.title,
        config = ?cli.config,
        "configuration loaded"
    );

    let listener = config.server.bind().await?;
    let addr = listener.local_addr()?;
    tracing::info!(host = %config.server.host, "listening on http://{addr}");

    let app = handlers::router(AppState::with_config(config));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
