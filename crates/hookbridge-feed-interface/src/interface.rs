//! Feed interfaces.

use async_trait::async_trait;

use crate::{FeedMessage, Result};

/// Named destination which serialized events are published to.
///
/// Implementations must be usable concurrently from several requests.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait Feed: Send + Sync {
    /// Publish a message, waiting for the transport acknowledgement.
    async fn publish(&self, message: &FeedMessage) -> Result<()>;
}
