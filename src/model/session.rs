use uuid::Uuid;

/// Transport-assigned identifier for one connection's lifetime.
pub type SessionId = Uuid;
