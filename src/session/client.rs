use anyhow::Result;

/// Handle to a live messaging session
///
/// Implementations:
/// - `bridge::WhatsAppClient`: forwards sends to the automation worker over NATS
/// - test fakes that record or reject sends
#[async_trait::async_trait]
pub trait MessagingClient: Send + Sync {
    /// Send a text message to a recipient address (e.g. `15551234567@c.us`)
    async fn send_text(&self, to: &str, body: &str) -> Result<()>;
}
