use crate::model::SessionId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignalingError {
    #[error("Session {session_id} found in both waiting queue and pairing table")]
    InconsistentState { session_id: SessionId },

    #[error("Serialization error")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
