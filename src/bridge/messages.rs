use crate::session::SessionEvent;
use serde::{Deserialize, Serialize};

/// Request asking the automation worker to open a WhatsApp Web session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    pub session: String,
    pub headless: bool,
    pub devtools: bool,
    pub use_chrome: bool,
    pub debug: bool,
    #[serde(rename = "logQR")]
    pub log_qr: bool,
    #[serde(rename = "browserWS")]
    pub browser_ws: String,
    pub browser_args: Vec<String>,
    pub ignore_default_args: Vec<String>,
    pub executable_path: Option<String>,
    /// Paths the worker probes on its own host when `executable_path` is unset
    pub executable_candidates: Vec<String>,
    pub timeout_ms: u64,
    pub disable_welcome: bool,
    pub updates_log: bool,
    pub auto_close: u64,
}

/// Worker reply to a create or send request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerReply {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl WorkerReply {
    /// Turn a failed reply into an error carrying the worker's message
    pub fn into_result(self) -> anyhow::Result<()> {
        if self.success {
            Ok(())
        } else {
            anyhow::bail!(self
                .error
                .unwrap_or_else(|| "worker reported failure without a message".to_string()))
        }
    }
}

/// Outbound text message forwarded to the worker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendTextRequest {
    /// Correlates gateway and worker logs
    pub id: uuid::Uuid,
    /// Recipient address, e.g. `15551234567@c.us`
    pub to: String,
    pub message: String,
}

/// Lifecycle event published by the worker for a session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum SessionEventMessage {
    Qr {
        #[serde(rename = "base64Qr")]
        base64_qr: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        attempt: Option<u32>,
        #[serde(default, rename = "urlCode", skip_serializing_if = "Option::is_none")]
        url_code: Option<String>,
    },
    Status {
        status: String,
    },
    Ready,
    Disconnected {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },
}

impl From<SessionEventMessage> for SessionEvent {
    fn from(msg: SessionEventMessage) -> Self {
        match msg {
            SessionEventMessage::Qr { base64_qr, .. } => SessionEvent::Qr(base64_qr),
            SessionEventMessage::Status { status } => SessionEvent::Status(status),
            SessionEventMessage::Ready => SessionEvent::Ready,
            SessionEventMessage::Disconnected { reason } => SessionEvent::Disconnected(reason),
        }
    }
}
