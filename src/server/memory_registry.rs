use super::{Connection, SessionRegistry};
use crate::model::{SessionId, SignalingError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::{debug, error, instrument};

pub struct MemoryRegistry {
    sessions: Arc<RwLock<HashMap<SessionId, Connection>>>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MemoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionRegistry for MemoryRegistry {
    #[instrument(skip(self, connection))]
    async fn add_session(&self, connection: Connection) -> Result<(), SignalingError> {
        debug!(?connection.session_id, "Adding session");
        match self.sessions.write() {
            Ok(mut sessions) => {
                sessions.insert(connection.session_id, connection);
                Ok(())
            }
            Err(e) => {
                error!(?e, "Failed to add session");
                Err(SignalingError::Internal(e.to_string()))
            }
        }
    }

    #[instrument(skip(self))]
    async fn remove_session(&self, id: SessionId) -> Result<(), SignalingError> {
        debug!(?id, "Removing session");
        match self.sessions.write() {
            Ok(mut sessions) => {
                sessions.remove(&id);
                Ok(())
            }
            Err(e) => {
                error!(?e, "Failed to remove session");
                Err(SignalingError::Internal(e.to_string()))
            }
        }
    }

    #[instrument(skip(self))]
    async fn get_session(&self, id: SessionId) -> Result<Option<Connection>, SignalingError> {
        match self.sessions.read() {
            Ok(sessions) => Ok(sessions.get(&id).cloned()),
            Err(e) => {
                error!(?e, "Failed to get session");
                Err(SignalingError::Internal(e.to_string()))
            }
        }
    }

    #[instrument(skip(self))]
    async fn session_count(&self) -> Result<usize, SignalingError> {
        match self.sessions.read() {
            Ok(sessions) => Ok(sessions.len()),
            Err(e) => Err(SignalingError::Internal(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::unbounded_channel;

    #[tokio::test]
    async fn test_add_session() {
        let registry = MemoryRegistry::new();
        let connection = Connection::new(SessionId::new_v4(), unbounded_channel().0);
        let result = registry.add_session(connection.clone()).await;
        assert!(result.is_ok());
        assert_eq!(
            registry.get_session(connection.session_id).await.unwrap(),
            Some(connection)
        );
    }

    #[tokio::test]
    async fn test_remove_session() {
        let registry = MemoryRegistry::new();
        let connection = Connection::new(SessionId::new_v4(), unbounded_channel().0);
        registry.add_session(connection.clone()).await.unwrap();
        registry.remove_session(connection.session_id).await.unwrap();
        assert_eq!(
            registry.get_session(connection.session_id).await.unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn test_get_unknown_session() {
        let registry = MemoryRegistry::new();
        assert_eq!(registry.get_session(SessionId::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_session_count() {
        let registry = MemoryRegistry::new();
        assert_eq!(registry.session_count().await.unwrap(), 0);
        registry
            .add_session(Connection::new(SessionId::new_v4(), unbounded_channel().0))
            .await
            .unwrap();
        registry
            .add_session(Connection::new(SessionId::new_v4(), unbounded_channel().0))
            .await
            .unwrap();
        assert_eq!(registry.session_count().await.unwrap(), 2);
    }
}
