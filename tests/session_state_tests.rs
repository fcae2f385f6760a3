// Session state transitions driven through the observer interface

use std::sync::Arc;
use whatsapp_gateway::{
    MessagingClient, SessionEvent, SessionObserver, SessionState, StatusSnapshot,
};

struct NoopClient;

#[async_trait::async_trait]
impl MessagingClient for NoopClient {
    async fn send_text(&self, _to: &str, _body: &str) -> anyhow::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_new_state_is_empty() {
    let state = SessionState::new();

    assert_eq!(
        state.snapshot().await,
        StatusSnapshot {
            client_ready: false,
            has_qr: false
        }
    );
    assert!(state.qr().await.is_none());
    assert!(state.ready_client().await.is_none());
}

#[tokio::test]
async fn test_qr_overwrites_previous() {
    let state = SessionState::new();

    state.on_qr("attempt-1".to_string()).await;
    state.on_qr("attempt-2".to_string()).await;

    assert_eq!(state.qr().await.as_deref(), Some("attempt-2"));
    assert!(state.snapshot().await.has_qr);
}

#[tokio::test]
async fn test_client_without_ready_is_not_usable() {
    let state = SessionState::new();
    state.on_client(Arc::new(NoopClient)).await;

    assert!(state.ready_client().await.is_none());
    assert!(!state.snapshot().await.client_ready);
}

#[tokio::test]
async fn test_ready_without_client_is_not_usable() {
    let state = SessionState::new();
    state.on_ready().await;

    assert!(state.snapshot().await.client_ready);
    assert!(state.ready_client().await.is_none());
}

#[tokio::test]
async fn test_ready_clears_qr_and_keeps_client() {
    let state = SessionState::new();
    state.on_qr("scan-me".to_string()).await;
    state.on_client(Arc::new(NoopClient)).await;
    state.on_ready().await;

    assert!(state.qr().await.is_none());
    assert!(state.ready_client().await.is_some());
    assert_eq!(
        state.snapshot().await,
        StatusSnapshot {
            client_ready: true,
            has_qr: false
        }
    );
}

#[tokio::test]
async fn test_disconnect_drops_client() {
    let state = SessionState::new();
    state.on_client(Arc::new(NoopClient)).await;
    state.on_ready().await;

    state.on_disconnected(None).await;

    assert!(!state.snapshot().await.client_ready);
    assert!(state.ready_client().await.is_none());

    // A new ready alone does not bring the old handle back
    state.on_ready().await;
    assert!(state.ready_client().await.is_none());
}

#[tokio::test]
async fn test_status_event_changes_nothing() {
    let state = SessionState::new();
    state.on_status("notLogged".to_string()).await;

    assert_eq!(
        state.snapshot().await,
        StatusSnapshot {
            client_ready: false,
            has_qr: false
        }
    );
}

#[tokio::test]
async fn test_dispatch_routes_events() {
    let state = SessionState::new();

    SessionEvent::Qr("qr-data".to_string()).dispatch(&state).await;
    assert_eq!(state.qr().await.as_deref(), Some("qr-data"));

    SessionEvent::Ready.dispatch(&state).await;
    assert!(state.snapshot().await.client_ready);
    assert!(state.qr().await.is_none());

    SessionEvent::Disconnected(Some("CONFLICT".to_string()))
        .dispatch(&state)
        .await;
    assert!(!state.snapshot().await.client_ready);
}

#[tokio::test]
async fn test_status_snapshot_serializes_camel_case() {
    let snapshot = StatusSnapshot {
        client_ready: true,
        has_qr: false,
    };

    let json = serde_json::to_value(snapshot).unwrap();
    assert_eq!(json, serde_json::json!({ "clientReady": true, "hasQR": false }));
}
