use super::client::MessagingClient;
use super::events::SessionObserver;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// Point-in-time view of the session, read under a single lock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSnapshot {
    pub client_ready: bool,
    #[serde(rename = "hasQR")]
    pub has_qr: bool,
}

#[derive(Default)]
struct Inner {
    /// Latest login QR code (base64 image data), cleared once ready
    qr: Option<String>,

    /// Client handle, present from session creation until disconnect
    client: Option<Arc<dyn MessagingClient>>,

    /// Whether the session is logged in
    ready: bool,
}

/// Process-wide messaging session state
///
/// Written by backend callbacks (via [`SessionObserver`]) and read by HTTP
/// handlers. Starts empty and is never persisted.
#[derive(Default)]
pub struct SessionState {
    inner: RwLock<Inner>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn snapshot(&self) -> StatusSnapshot {
        let inner = self.inner.read().await;
        StatusSnapshot {
            client_ready: inner.ready,
            has_qr: inner.qr.is_some(),
        }
    }

    /// Current QR payload, if one has been issued and login hasn't completed
    pub async fn qr(&self) -> Option<String> {
        self.inner.read().await.qr.clone()
    }

    /// Client handle, only when the session is ready to send
    pub async fn ready_client(&self) -> Option<Arc<dyn MessagingClient>> {
        let inner = self.inner.read().await;
        if inner.ready {
            inner.client.clone()
        } else {
            None
        }
    }
}

#[async_trait::async_trait]
impl SessionObserver for SessionState {
    async fn on_qr(&self, payload: String) {
        info!("QR code received ({} bytes)", payload.len());
        self.inner.write().await.qr = Some(payload);
    }

    async fn on_status(&self, status: String) {
        info!("Session status: {}", status);
    }

    async fn on_client(&self, client: Arc<dyn MessagingClient>) {
        info!("WhatsApp client initialized");
        self.inner.write().await.client = Some(client);
    }

    async fn on_ready(&self) {
        info!("WhatsApp fully connected");
        let mut inner = self.inner.write().await;
        inner.ready = true;
        inner.qr = None;
    }

    async fn on_disconnected(&self, reason: Option<String>) {
        warn!(
            "WhatsApp disconnected: {}",
            reason.as_deref().unwrap_or("no reason given")
        );
        let mut inner = self.inner.write().await;
        inner.ready = false;
        inner.client = None;
    }
}
