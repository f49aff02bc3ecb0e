use crate::server::{websocket_listener, SignalingHandler};
use axum::{routing::get, Router};

pub fn create_signaling_route(handler: SignalingHandler) -> Router {
    Router::new()
        .route("/ws", get(websocket_listener::handle_websocket))
        .route("/health", get(health))
        .with_state(handler)
}

async fn health() -> &'static str {
    "OK"
}
