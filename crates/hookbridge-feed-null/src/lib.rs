//! Null feed, logging messages instead of publishing them.

use async_trait::async_trait;
use hookbridge_feed_interface::{Feed, FeedMessage, Result};
use tracing::info;

/// Null feed.
#[derive(Clone, Debug)]
pub struct NullFeed {
    name: String,
}

impl NullFeed {
    /// Creates a null feed.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait]
impl Feed for NullFeed {
    #[tracing::instrument(skip_all, fields(feed = self.name))]
    async fn publish(&self, message: &FeedMessage) -> Result<()> {
        info!(
            attributes = ?message.attributes,
            size = message.data.len(),
            message = "Dropping message"
        );

        Ok(())
    }
}
