use crate::session::SessionState;
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// The WhatsApp session, also written by the lifecycle driver
    pub session: Arc<SessionState>,
}

impl AppState {
    pub fn new(session: Arc<SessionState>) -> Self {
        Self { session }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(SessionState::new()))
    }
}
