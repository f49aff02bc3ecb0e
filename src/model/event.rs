use crate::model::SessionId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Events a connected session sends to the server.
///
/// Handshake payloads are opaque: they are routed by `to` and never
/// inspected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ClientEvent {
    FindMatch,
    Offer { to: SessionId, offer: Value },
    Answer { to: SessionId, answer: Value },
    IceCandidate { to: SessionId, candidate: Value },
    Leave,
}

/// Events the server emits to a specific session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ServerEvent {
    #[serde(rename_all = "camelCase")]
    Match {
        peer_id: SessionId,
        should_create_offer: bool,
    },
    Offer {
        from: SessionId,
        offer: Value,
    },
    Answer {
        from: SessionId,
        answer: Value,
    },
    IceCandidate {
        from: SessionId,
        candidate: Value,
    },
    PeerDisconnected,
}
