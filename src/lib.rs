pub mod bridge;
pub mod config;
pub mod http;
pub mod session;

pub use bridge::{run_session, NatsBridge, WhatsAppClient};
pub use crate::config::Config;
pub use http::{create_router, AppState};
pub use session::{
    chat_address, normalize_phone, MessagingClient, SessionEvent, SessionObserver, SessionState,
    StatusSnapshot,
};
