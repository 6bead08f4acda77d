//! Publication errors.

use hookbridge_feed_interface::FeedError;
use thiserror::Error;

use crate::FeedKind;

/// Publication error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Could not serialize event,\n  caused by: {source}")]
    Serialization { source: serde_json::Error },

    #[error("Could not publish event to the primary feed,\n  caused by: {source}")]
    PrimaryFeed { source: FeedError },

    #[error("Event published to the primary feed, but not to the public feed,\n  caused by: {source}")]
    PublicFeed { source: FeedError },
}

impl PublishError {
    /// The primary delivery succeeded.
    pub fn is_partial(&self) -> bool {
        matches!(self, Self::PublicFeed { .. })
    }

    /// Feed which failed, if any.
    pub fn feed(&self) -> Option<FeedKind> {
        match self {
            Self::Serialization { .. } => None,
            Self::PrimaryFeed { .. } => Some(FeedKind::Primary),
            Self::PublicFeed { .. } => Some(FeedKind::PublicOnly),
        }
    }
}

impl From<serde_json::Error> for PublishError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization { source: e }
    }
}

/// Result alias for `PublishError`.
pub type Result<T, E = PublishError> = core::result::Result<T, E>;
