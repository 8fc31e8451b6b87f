use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use portal_api::{AppState, DEFAULT_UPSTREAM, router};

#[derive(Parser, Debug)]
#[command(name = "portal-api", about = "HTTP service for the neuro portal")]
struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:8787")]
    bind: SocketAddr,

    /// Base URL of the medical-explanation service.
    #[arg(long, default_value = DEFAULT_UPSTREAM)]
    upstream: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let app = router(AppState::new(args.upstream));

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    tracing::info!("portal api listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
