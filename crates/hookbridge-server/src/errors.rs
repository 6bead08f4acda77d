//! Server errors.

use actix_http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use hookbridge_core::PublishError;
use hookbridge_event::EventError;
use thiserror::Error;

/// Server error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Event { source: EventError },

    #[error(transparent)]
    Publish { source: PublishError },

    #[error("I/O error,\n  caused by: {source}")]
    IoError { source: std::io::Error },

    #[error("Could not set up metrics,\n  caused by: {source}")]
    MetricsError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl From<EventError> for ServerError {
    fn from(e: EventError) -> Self {
        Self::Event { source: e }
    }
}

impl From<PublishError> for ServerError {
    fn from(e: PublishError) -> Self {
        Self::Publish { source: e }
    }
}

impl From<prometheus::Error> for ServerError {
    fn from(e: prometheus::Error) -> Self {
        Self::MetricsError { source: e.into() }
    }
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match &self {
            ServerError::Event { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string()
        }))
    }
}

/// Result alias for `ServerError`.
pub type Result<T, E = ServerError> = core::result::Result<T, E>;
