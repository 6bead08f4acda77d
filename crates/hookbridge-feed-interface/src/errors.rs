//! Feed errors.

use thiserror::Error;

/// Feed error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Could not reach feed '{feed}',\n  caused by: {source}")]
    HttpError {
        feed: String,
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    #[error("Feed '{feed}' rejected the message with status {status}: {body}")]
    Rejected {
        feed: String,
        status: u16,
        body: String,
    },

    #[error("Could not get feed credentials,\n  caused by: {source}")]
    AuthenticationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// Result alias for `FeedError`.
pub type Result<T, E = FeedError> = core::result::Result<T, E>;
