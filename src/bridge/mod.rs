//! NATS bridge to the WhatsApp Web automation worker
//!
//! The worker owns the browser and the WhatsApp protocol. The gateway talks
//! to it over three subjects (`{prefix}` defaults to `whatsapp`):
//! - `{prefix}.session.create` - request/reply, opens the session
//! - `{prefix}.{session}.events` - QR, status, ready and disconnect events
//! - `{prefix}.{session}.send` - request/reply, sends one text message

pub mod browser;
pub mod client;
pub mod messages;

pub use browser::{create_session_request, resolve_executable};
pub use client::{forward_events, run_session, NatsBridge, WhatsAppClient};
pub use messages::{CreateSessionRequest, SendTextRequest, SessionEventMessage, WorkerReply};
