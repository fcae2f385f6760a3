//! HTTP API in front of the WhatsApp session
//!
//! - GET / - Status with timestamp
//! - GET /health - Health check
//! - GET /api/status - Readiness and QR availability
//! - GET /api/qr - Current login QR code
//! - POST /api/send-whatsapp - Send a text message

mod error;
mod handlers;
mod routes;
mod state;

pub use error::SendError;
pub use handlers::{HealthResponse, QrResponse, RootStatusResponse, SendRequest, SendResponse};
pub use routes::create_router;
pub use state::AppState;
