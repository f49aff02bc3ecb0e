mod connection;
mod matchmaker;
mod memory_registry;
mod session_registry;
mod signaling_handler;
pub mod route;
pub mod websocket_listener;

pub use connection::Connection;
pub use matchmaker::{MatchOutcome, Matchmaker};
pub use memory_registry::MemoryRegistry;
pub use route::create_signaling_route;
pub use session_registry::SessionRegistry;
pub use signaling_handler::SignalingHandler;
