pub mod config;
pub mod model;
pub mod server;

pub mod prelude {
    pub use crate::config::Config;
    pub use crate::model::ClientEvent;
    pub use crate::model::ServerEvent;
    pub use crate::model::SessionId;
    pub use crate::model::SignalingError;
    pub use crate::server::MatchOutcome;
    pub use crate::server::Matchmaker;
    pub use crate::server::MemoryRegistry;
    pub use crate::server::SessionRegistry;
    pub use crate::server::SignalingHandler;
}
