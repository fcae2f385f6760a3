//! Messaging session state and lifecycle
//!
//! This module holds everything the HTTP layer needs to know about the
//! WhatsApp session, independent of how the backend is reached:
//! - `SessionState`: QR payload, client handle and readiness flag
//! - `SessionObserver`: the callback interface the backend drives
//! - `MessagingClient`: the handle used to send text messages
//! - Recipient address normalization

mod address;
mod client;
mod events;
mod state;

pub use address::{chat_address, normalize_phone, CONTACT_SUFFIX};
pub use client::MessagingClient;
pub use events::{SessionEvent, SessionObserver};
pub use state::{SessionState, StatusSnapshot};
