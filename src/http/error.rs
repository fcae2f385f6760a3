use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Failure modes of the send endpoint
#[derive(Debug, Error)]
pub enum SendError {
    #[error("WhatsApp client not ready yet")]
    NotReady,
    #[error("phone & message required")]
    BadRequest,
    /// The backend rejected the send; carries its error text
    #[error("{0}")]
    Failed(String),
}

impl SendError {
    pub fn status(&self) -> StatusCode {
        match self {
            SendError::NotReady => StatusCode::SERVICE_UNAVAILABLE,
            SendError::BadRequest => StatusCode::BAD_REQUEST,
            SendError::Failed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
struct SendErrorBody {
    success: bool,
    error: String,
}

impl IntoResponse for SendError {
    fn into_response(self) -> Response {
        let body = SendErrorBody {
            success: false,
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
