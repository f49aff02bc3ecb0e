use super::Connection;
use crate::model::{SessionId, SignalingError};
use async_trait::async_trait;

/// Registry of currently connected sessions, owned by the server process.
#[async_trait]
pub trait SessionRegistry: Send + Sync {
    async fn add_session(&self, connection: Connection) -> Result<(), SignalingError>;
    async fn remove_session(&self, id: SessionId) -> Result<(), SignalingError>;
    async fn get_session(&self, id: SessionId) -> Result<Option<Connection>, SignalingError>;
    async fn session_count(&self) -> Result<usize, SignalingError>;
}
