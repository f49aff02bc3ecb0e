use crate::model::{SessionId, SignalingError};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use tracing::{debug, error, info, instrument};

/// Result of a match request, reported to the caller so it can emit the
/// corresponding notifications outside the state lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The session was already paired; the request is ignored.
    AlreadyPaired,
    /// No peer was available; the session is queued.
    Waiting,
    /// Two sessions were paired. The offerer is the session that was
    /// already waiting, the answerer is the one whose request completed
    /// the pair.
    Paired {
        offerer: SessionId,
        answerer: SessionId,
    },
}

#[derive(Default)]
struct MatchState {
    waiting: VecDeque<SessionId>,
    pairings: HashMap<SessionId, SessionId>,
}

/// Owns the waiting queue and the pairing table behind a single lock.
///
/// Invariants: a session appears at most once in the queue; pairings are
/// symmetric; no session is in the queue and the table at the same time.
/// Every public operation is one critical section, so concurrent requests
/// can never pop the same waiting peer or pair with a terminated session.
pub struct Matchmaker {
    state: Mutex<MatchState>,
}

impl Matchmaker {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MatchState::default()),
        }
    }

    /// Handles a match request from `session_id`.
    ///
    /// A paired session's request is a no-op. A waiting session is moved
    /// to the tail unless a distinct peer is available. FIFO: the
    /// longest-waiting session is always matched first.
    #[instrument(skip(self))]
    pub fn request_match(&self, session_id: SessionId) -> Result<MatchOutcome, SignalingError> {
        match self.state.lock() {
            Ok(mut state) => {
                if state.pairings.contains_key(&session_id) {
                    if state.waiting.contains(&session_id) {
                        error!(
                            ?session_id,
                            "Session found in both waiting queue and pairing table"
                        );
                        return Err(SignalingError::InconsistentState { session_id });
                    }
                    debug!(?session_id, "Ignoring match request from paired session");
                    return Ok(MatchOutcome::AlreadyPaired);
                }

                state.waiting.retain(|id| *id != session_id);

                match state.waiting.pop_front() {
                    None => {
                        state.waiting.push_back(session_id);
                        debug!(?session_id, "No peer available, session queued");
                        Ok(MatchOutcome::Waiting)
                    }
                    Some(peer_id) => {
                        if state.pairings.contains_key(&peer_id) {
                            error!(
                                ?peer_id,
                                "Waiting session found in both waiting queue and pairing table"
                            );
                            return Err(SignalingError::InconsistentState {
                                session_id: peer_id,
                            });
                        }
                        state.pairings.insert(session_id, peer_id);
                        state.pairings.insert(peer_id, session_id);
                        info!(?session_id, ?peer_id, "Sessions paired");
                        Ok(MatchOutcome::Paired {
                            offerer: peer_id,
                            answerer: session_id,
                        })
                    }
                }
            }
            Err(e) => Err(SignalingError::Internal(e.to_string())),
        }
    }

    /// Removes `session_id` from the queue and the pairing table.
    ///
    /// Returns the former peer so the caller can notify it exactly once.
    #[instrument(skip(self))]
    pub fn terminate(&self, session_id: SessionId) -> Result<Option<SessionId>, SignalingError> {
        match self.state.lock() {
            Ok(mut state) => {
                state.waiting.retain(|id| *id != session_id);
                if let Some(peer_id) = state.pairings.remove(&session_id) {
                    state.pairings.remove(&peer_id);
                    info!(?session_id, ?peer_id, "Pairing cleared");
                    return Ok(Some(peer_id));
                }
                Ok(None)
            }
            Err(e) => Err(SignalingError::Internal(e.to_string())),
        }
    }

    /// Current pairing partner of `session_id`, if any.
    pub fn peer_of(&self, session_id: SessionId) -> Result<Option<SessionId>, SignalingError> {
        match self.state.lock() {
            Ok(state) => Ok(state.pairings.get(&session_id).copied()),
            Err(e) => Err(SignalingError::Internal(e.to_string())),
        }
    }

    pub fn is_waiting(&self, session_id: SessionId) -> Result<bool, SignalingError> {
        match self.state.lock() {
            Ok(state) => Ok(state.waiting.contains(&session_id)),
            Err(e) => Err(SignalingError::Internal(e.to_string())),
        }
    }

    pub fn waiting_count(&self) -> Result<usize, SignalingError> {
        match self.state.lock() {
            Ok(state) => Ok(state.waiting.len()),
            Err(e) => Err(SignalingError::Internal(e.to_string())),
        }
    }
}

impl Default for Matchmaker {
    fn default() -> Self {
        Self::new()
    }
}
