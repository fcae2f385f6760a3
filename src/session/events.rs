use super::client::MessagingClient;
use std::sync::Arc;

/// Lifecycle callbacks raised by the messaging backend
///
/// The backend fires these in whatever order its own event loop dictates:
/// - `on_qr` repeatedly until the phone scans a code
/// - `on_client` once the session object exists
/// - `on_ready` once login and handshake complete
/// - `on_disconnected` on logout or connection loss
#[async_trait::async_trait]
pub trait SessionObserver: Send + Sync {
    /// A new login QR code was issued (base64-encoded image data)
    async fn on_qr(&self, payload: String);

    /// Informational status string from the backend
    async fn on_status(&self, status: String);

    /// Session creation succeeded and a client handle is available
    async fn on_client(&self, client: Arc<dyn MessagingClient>);

    /// The session is logged in and can send messages
    async fn on_ready(&self);

    /// The session was lost
    async fn on_disconnected(&self, reason: Option<String>);
}

/// A lifecycle event received from the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Qr(String),
    Status(String),
    Ready,
    Disconnected(Option<String>),
}

impl SessionEvent {
    /// Route this event to the matching observer callback
    pub async fn dispatch(self, observer: &dyn SessionObserver) {
        match self {
            SessionEvent::Qr(payload) => observer.on_qr(payload).await,
            SessionEvent::Status(status) => observer.on_status(status).await,
            SessionEvent::Ready => observer.on_ready().await,
            SessionEvent::Disconnected(reason) => observer.on_disconnected(reason).await,
        }
    }
}
