//! Feed wrappers.

use async_trait::async_trait;
use hookbridge_feed_interface::{Feed, FeedMessage, Result};

use crate::metrics::FEED_PUBLISH_TOTAL;

/// Feed counting its publications.
pub struct MetricsFeed {
    name: String,
    inner: Box<dyn Feed>,
}

impl MetricsFeed {
    /// Wraps a feed.
    pub fn new<T: Into<String>>(name: T, inner: Box<dyn Feed>) -> Self {
        Self {
            name: name.into(),
            inner,
        }
    }
}

#[async_trait]
impl Feed for MetricsFeed {
    async fn publish(&self, message: &FeedMessage) -> Result<()> {
        let result = self.inner.publish(message).await;
        let outcome = if result.is_ok() { "success" } else { "failure" };
        FEED_PUBLISH_TOTAL
            .with_label_values(&[&self.name, outcome])
            .inc();

        result
    }
}
