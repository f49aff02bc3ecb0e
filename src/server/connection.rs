use crate::model::SessionId;
use axum::extract::ws::Message;
use tokio::sync::mpsc::UnboundedSender;

/// One live transport connection and its outbound channel.
#[derive(Debug, Clone)]
pub struct Connection {
    pub session_id: SessionId,
    pub sender: UnboundedSender<Message>,
}

impl PartialEq for Connection {
    fn eq(&self, other: &Self) -> bool {
        self.session_id == other.session_id
    }
}

impl Connection {
    pub fn new(session_id: SessionId, sender: UnboundedSender<Message>) -> Self {
        Connection { session_id, sender }
    }
}
