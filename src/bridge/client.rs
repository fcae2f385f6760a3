use super::browser::create_session_request;
use super::messages::{CreateSessionRequest, SendTextRequest, SessionEventMessage, WorkerReply};
use crate::config::WhatsAppConfig;
use crate::session::{MessagingClient, SessionEvent, SessionObserver};
use anyhow::{Context, Result};
use async_nats::Client;
use futures::stream::{Stream, StreamExt};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// Connection to the browser automation worker
pub struct NatsBridge {
    client: Client,
    prefix: String,
}

impl NatsBridge {
    /// Connect to NATS server
    ///
    /// Requests carry no client-side timeout: session creation waits as long
    /// as the worker's own browser timeout allows.
    pub async fn connect(url: &str, prefix: String) -> Result<Self> {
        info!("Connecting to NATS at {}", url);

        let client = async_nats::ConnectOptions::new()
            .request_timeout(None)
            .connect(url)
            .await
            .context("Failed to connect to NATS")?;

        info!("Connected to NATS successfully");

        Ok(Self { client, prefix })
    }

    pub fn events_subject(&self, session: &str) -> String {
        format!("{}.{}.events", self.prefix, session)
    }

    pub fn send_subject(&self, session: &str) -> String {
        format!("{}.{}.send", self.prefix, session)
    }

    pub fn create_subject(&self) -> String {
        format!("{}.session.create", self.prefix)
    }

    /// Ask the worker to create a session and forward its events to `observer`
    ///
    /// The event subscription is opened before the create request so QR codes
    /// issued while the worker is still launching the browser are not lost.
    /// Returns the event forwarding task, which runs until the subscription
    /// closes.
    pub async fn start_session(
        &self,
        request: CreateSessionRequest,
        observer: Arc<dyn SessionObserver>,
    ) -> Result<JoinHandle<()>> {
        let session = request.session.clone();
        let handle: Arc<dyn MessagingClient> = Arc::new(WhatsAppClient {
            client: self.client.clone(),
            subject: self.send_subject(&session),
        });

        let events_subject = self.events_subject(&session);
        info!("Subscribing to session events on {}", events_subject);

        let subscriber = self
            .client
            .subscribe(events_subject)
            .await
            .context("Failed to subscribe to session events")?;

        let events_task = tokio::spawn(forward_events(
            subscriber.map(|msg| msg.payload),
            Arc::clone(&observer),
            Arc::clone(&handle),
        ));

        info!("Requesting WhatsApp session '{}'", session);

        if let Err(e) = self.create(&request).await {
            events_task.abort();
            return Err(e);
        }

        observer.on_client(handle).await;

        Ok(events_task)
    }

    async fn create(&self, request: &CreateSessionRequest) -> Result<()> {
        let payload = serde_json::to_vec(request)?;

        let reply = self
            .client
            .request(self.create_subject(), payload.into())
            .await
            .context("Session creation request failed")?;

        let reply: WorkerReply = serde_json::from_slice(&reply.payload)
            .context("Invalid session creation reply from worker")?;

        reply.into_result().context("Worker failed to create session")
    }
}

/// Feed worker events into the observer until the stream ends
///
/// The worker may log back in after a disconnect; the client handle is
/// re-announced before the next ready event so sends work again.
pub async fn forward_events<S>(
    mut events: S,
    observer: Arc<dyn SessionObserver>,
    handle: Arc<dyn MessagingClient>,
) where
    S: Stream + Unpin,
    S::Item: AsRef<[u8]>,
{
    info!("Session event task started");

    let mut detached = false;

    while let Some(payload) = events.next().await {
        let event = match serde_json::from_slice::<SessionEventMessage>(payload.as_ref()) {
            Ok(event) => SessionEvent::from(event),
            Err(e) => {
                warn!("Failed to parse session event: {}", e);
                continue;
            }
        };

        match &event {
            SessionEvent::Ready if detached => {
                observer.on_client(Arc::clone(&handle)).await;
                detached = false;
            }
            SessionEvent::Disconnected(_) => detached = true,
            _ => {}
        }

        event.dispatch(observer.as_ref()).await;
    }

    info!("Session event task stopped");
}

/// Client handle that forwards sends to the worker's session
pub struct WhatsAppClient {
    client: Client,
    subject: String,
}

#[async_trait::async_trait]
impl MessagingClient for WhatsAppClient {
    async fn send_text(&self, to: &str, body: &str) -> Result<()> {
        let request = SendTextRequest {
            id: uuid::Uuid::new_v4(),
            to: to.to_string(),
            message: body.to_string(),
        };

        let payload = serde_json::to_vec(&request)?;

        let reply = self
            .client
            .request(self.subject.clone(), payload.into())
            .await
            .context("Failed to reach automation worker")?;

        let reply: WorkerReply =
            serde_json::from_slice(&reply.payload).context("Invalid send reply from worker")?;

        reply.into_result()?;

        info!("Sent message {} to {}", request.id, request.to);

        Ok(())
    }
}

/// Drive the session lifecycle for the whole process
///
/// Connects, requests the session and forwards events. A failure at any
/// step is logged once; there is no retry, so the gateway keeps serving and
/// reports not-ready indefinitely.
pub async fn run_session(config: WhatsAppConfig, observer: Arc<dyn SessionObserver>) {
    info!("Starting WhatsApp session '{}'", config.session);

    let started = async {
        let bridge = NatsBridge::connect(&config.nats_url, config.subject_prefix.clone()).await?;
        let request = create_session_request(&config.session, &config.browser);
        bridge.start_session(request, observer).await
    }
    .await;

    match started {
        Ok(events_task) => {
            if let Err(e) = events_task.await {
                error!("Session event task panicked: {}", e);
            }
        }
        Err(e) => error!("Failed to start WhatsApp session: {:#}", e),
    }
}
