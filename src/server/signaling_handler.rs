use super::{Connection, MatchOutcome, Matchmaker, SessionRegistry};
use crate::model::{ClientEvent, ServerEvent, SessionId, SignalingError};
use axum::extract::ws::Message;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, instrument};

/// Dispatches inbound session events to matchmaking, relay and lifecycle
/// handling, and fans outbound events into per-session senders.
///
/// All outbound delivery is fire-and-forget: a destination that is gone or
/// whose channel is closed degrades to a dropped event, never an error.
#[derive(Clone)]
pub struct SignalingHandler {
    registry: Arc<dyn SessionRegistry>,
    matchmaker: Arc<Matchmaker>,
}

impl SignalingHandler {
    pub fn new(registry: Arc<dyn SessionRegistry>, matchmaker: Arc<Matchmaker>) -> Self {
        SignalingHandler {
            registry,
            matchmaker,
        }
    }

    #[instrument(skip(self, sender))]
    pub async fn connect(
        &self,
        session_id: SessionId,
        sender: UnboundedSender<Message>,
    ) -> Result<(), SignalingError> {
        self.registry
            .add_session(Connection::new(session_id, sender))
            .await?;
        let session_count = self.registry.session_count().await?;
        info!(?session_id, session_count, "Session connected");
        Ok(())
    }

    #[instrument(skip(self, event))]
    pub async fn handle_event(
        &self,
        session_id: SessionId,
        event: ClientEvent,
    ) -> Result<(), SignalingError> {
        match event {
            ClientEvent::FindMatch => self.request_match(session_id).await,
            ClientEvent::Offer { to, offer } => {
                self.relay(
                    to,
                    ServerEvent::Offer {
                        from: session_id,
                        offer,
                    },
                )
                .await
            }
            ClientEvent::Answer { to, answer } => {
                self.relay(
                    to,
                    ServerEvent::Answer {
                        from: session_id,
                        answer,
                    },
                )
                .await
            }
            ClientEvent::IceCandidate { to, candidate } => {
                self.relay(
                    to,
                    ServerEvent::IceCandidate {
                        from: session_id,
                        candidate,
                    },
                )
                .await
            }
            ClientEvent::Leave => self.leave(session_id).await,
        }
    }

    async fn request_match(&self, session_id: SessionId) -> Result<(), SignalingError> {
        match self.matchmaker.request_match(session_id)? {
            MatchOutcome::AlreadyPaired | MatchOutcome::Waiting => Ok(()),
            MatchOutcome::Paired { offerer, answerer } => {
                self.send_event(
                    offerer,
                    &ServerEvent::Match {
                        peer_id: answerer,
                        should_create_offer: true,
                    },
                )
                .await?;
                self.send_event(
                    answerer,
                    &ServerEvent::Match {
                        peer_id: offerer,
                        should_create_offer: false,
                    },
                )
                .await
            }
        }
    }

    /// Forwards an opaque handshake payload to its destination. The
    /// payload is never inspected and match state is never touched.
    async fn relay(&self, to: SessionId, event: ServerEvent) -> Result<(), SignalingError> {
        debug!(?to, "Relaying handshake payload");
        self.send_event(to, &event).await
    }

    /// Clears the session's matchmaking state and notifies its former
    /// peer. The session itself stays connected and can request a new
    /// match.
    pub async fn leave(&self, session_id: SessionId) -> Result<(), SignalingError> {
        if let Some(peer_id) = self.matchmaker.terminate(session_id)? {
            self.send_event(peer_id, &ServerEvent::PeerDisconnected)
                .await?;
        }
        Ok(())
    }

    /// Transport-level teardown: lifecycle cleanup plus registry removal.
    #[instrument(skip(self))]
    pub async fn disconnect(&self, session_id: SessionId) -> Result<(), SignalingError> {
        self.leave(session_id).await?;
        self.registry.remove_session(session_id).await?;
        let session_count = self.registry.session_count().await?;
        info!(?session_id, session_count, "Session disconnected");
        Ok(())
    }

    async fn send_event(
        &self,
        to: SessionId,
        event: &ServerEvent,
    ) -> Result<(), SignalingError> {
        match self.registry.get_session(to).await? {
            Some(connection) => {
                let text = serde_json::to_string(event)?;
                if let Err(e) = connection.sender.send(Message::Text(text)) {
                    debug!(?to, error = ?e, "Dropping event for closed connection");
                }
            }
            None => {
                debug!(?to, "Destination not connected, dropping event");
            }
        }
        Ok(())
    }
}
