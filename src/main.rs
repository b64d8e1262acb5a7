//! vidgate - HTTP façade over an external video stream resolver
//!
//! Accepts a video URL, lists the streams yt-dlp can see for it, and
//! proxies the bytes of a chosen stream back as a file download.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vidgate::resolver::YtDlpResolver;
use vidgate::server::{self, AppState};
use vidgate::utils::ServerSettings;

#[derive(Parser)]
#[command(name = "vidgate", about = "HTTP façade over yt-dlp stream resolution")]
struct Args {
    /// Interface to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// TCP port to listen on
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Verbose logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let settings = ServerSettings {
        host: args.host,
        port: args.port,
        debug: args.debug,
    };

    init_tracing(settings.debug);

    let resolver = YtDlpResolver::new().context("initializing yt-dlp resolver")?;
    let state = AppState::new(Arc::new(resolver));
    let app = server::router(state);

    let listener = TcpListener::bind(settings.bind_addr())
        .await
        .with_context(|| format!("binding to {}", settings.bind_addr()))?;
    info!("vidgate listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("running server")?;

    Ok(())
}

/// Honors RUST_LOG when set; otherwise defaults to info, raised to debug
/// for this crate by the --debug flag.
fn init_tracing(debug: bool) {
    let default_filter = if debug { "info,vidgate=debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    // Only graceful shutdown is affected if this fails; the process still
    // terminates when Ctrl+C fires.
    if let Err(err) = signal::ctrl_c().await {
        eprintln!("Failed to install Ctrl+C handler: {}", err);
    }
}
