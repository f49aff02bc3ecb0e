use std::sync::Arc;

use duo_session::config::Config;
use duo_session::server::{create_signaling_route, Matchmaker, MemoryRegistry, SignalingHandler};
use tracing::info;
use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
pub async fn main() {
    // Initialize tracing
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("duo_session=debug"));

    fmt::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .with_file(true)
        .with_ansi(true)
        .init();

    let config = Config::from_env();
    let addr = config.socket_addr();

    let registry = Arc::new(MemoryRegistry::new());
    let matchmaker = Arc::new(Matchmaker::new());
    let handler = SignalingHandler::new(registry, matchmaker);
    let router = create_signaling_route(handler);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    info!("Signaling server listening on ws://{}/ws", addr);

    axum::serve(listener, router)
        .await
        .expect("Server terminated");
}
