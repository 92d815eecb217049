use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use edge_gateway::config::Args;
use edge_gateway::router;
use edge_gateway::state::GatewayState;

#[tokio::main]
async fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("edge_gateway=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    let state = Arc::new(GatewayState::from_args(&args).unwrap_or_else(|e| {
        eprintln!("invalid configuration: {e}");
        std::process::exit(1);
    }));

    let app = router(state.clone()).into_make_service_with_connect_info::<SocketAddr>();

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    info!("Gateway running on http://localhost:{}", args.port);
    for (name, url) in state.registry.iter() {
        info!("  {} -> {}", name, url);
    }
    info!(
        "Rate limit: {} requests per {} seconds",
        args.rate_limit, args.rate_window
    );

    axum::serve(listener, app).await.unwrap();
}
