use super::error::SendError;
use super::state::AppState;
use crate::session::{chat_address, StatusSnapshot};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub client_ready: bool,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RootStatusResponse {
    pub status: String,
    pub client_ready: bool,
    #[serde(rename = "hasQR")]
    pub has_qr: bool,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct QrResponse {
    /// Base64-encoded QR image as issued by the backend
    pub qr: String,
}

#[derive(Debug, Deserialize)]
pub struct SendRequest {
    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SendResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /health
/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.session.snapshot().await;

    Json(HealthResponse {
        status: "OK".to_string(),
        client_ready: snapshot.client_ready,
        timestamp: Utc::now(),
    })
}

/// GET /
pub async fn root_status(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.session.snapshot().await;

    Json(RootStatusResponse {
        status: "OK".to_string(),
        client_ready: snapshot.client_ready,
        has_qr: snapshot.has_qr,
        timestamp: Utc::now(),
    })
}

/// GET /api/status
pub async fn get_status(State(state): State<AppState>) -> Json<StatusSnapshot> {
    Json(state.session.snapshot().await)
}

/// GET /api/qr
/// Latest login QR code; 404 until the backend issues one, and again once
/// the session is ready
pub async fn get_qr(State(state): State<AppState>) -> impl IntoResponse {
    match state.session.qr().await {
        Some(qr) => (StatusCode::OK, Json(QrResponse { qr })).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "QR code not available yet".to_string(),
            }),
        )
            .into_response(),
    }
}

/// POST /api/send-whatsapp
/// Send a text message through the ready session
///
/// Readiness is checked before the body, so an unready gateway answers 503
/// to any request.
pub async fn send_whatsapp(
    State(state): State<AppState>,
    body: Result<Json<SendRequest>, JsonRejection>,
) -> Result<Json<SendResponse>, SendError> {
    let client = state.session.ready_client().await.ok_or(SendError::NotReady)?;

    let (phone, message) = match body {
        Ok(Json(SendRequest {
            phone: Some(phone),
            message: Some(message),
        })) if !phone.is_empty() && !message.is_empty() => (phone, message),
        _ => return Err(SendError::BadRequest),
    };

    let to = chat_address(&phone);

    if let Err(e) = client.send_text(&to, &message).await {
        error!("Failed to send message to {}: {:#}", to, e);
        return Err(SendError::Failed(e.to_string()));
    }

    info!("Message sent to {}", to);

    Ok(Json(SendResponse { success: true }))
}
