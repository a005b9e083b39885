use anyhow::Context;
use clap::Parser;
use juntas_gateway::api::build_app;
use juntas_gateway::config::GatewayConfig;
use juntas_gateway::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Base URL of the juntas backend.
    #[arg(long, env = "BACKEND_URL")]
    backend_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let mut config = GatewayConfig::from_env();
    if let Some(url) = args.backend_url {
        config.upstream_base_url = url;
    }
    tracing::info!("Proxying /api to {}", config.upstream_base_url);

    let state = AppState::new(config).map_err(anyhow::Error::msg)?;
    let app = build_app(Arc::new(state));

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    tracing::info!("Gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("Server error")?;
    Ok(())
}
