//! Fan-out publisher.

use std::fmt;

use hookbridge_event::Event;
use hookbridge_feed_interface::{Feed, FeedMessage};
use tracing::{info, warn};

use crate::{extract_attributes, PublishError, Result};

/// Feed role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedKind {
    /// Receives every event.
    Primary,
    /// Receives events from public repositories only.
    PublicOnly,
}

impl FeedKind {
    /// Short name, used in logs and metrics.
    pub fn to_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::PublicOnly => "public",
        }
    }
}

impl fmt::Display for FeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

/// Feeds which received an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Primary feed only.
    PrimaryOnly,
    /// Primary and public-only feeds.
    PrimaryAndPublic,
}

/// Publishes events to the primary feed, and to the public-only feed when
/// they come from a public repository.
pub struct FanoutPublisher {
    feed: Box<dyn Feed>,
    public_feed: Box<dyn Feed>,
}

impl FanoutPublisher {
    /// Creates a publisher from its two feeds.
    pub fn new(feed: Box<dyn Feed>, public_feed: Box<dyn Feed>) -> Self {
        Self { feed, public_feed }
    }

    /// Publish an event.
    ///
    /// Publications are sequential: the public-only feed is never contacted
    /// when the primary publication fails.
    #[tracing::instrument(
        skip_all,
        fields(
            event_type = event.event_type,
            repository = event.repo_info.as_ref().map(|r| r.name.as_str())
        )
    )]
    pub async fn publish(&self, event: &Event) -> Result<Delivery> {
        let message = FeedMessage::new(serde_json::to_vec(event)?, extract_attributes(event));

        self.feed.publish(&message).await.map_err(|e| {
            warn!(feed = %FeedKind::Primary, error = %e, message = "Publication failed");
            PublishError::PrimaryFeed { source: e }
        })?;

        let is_public = event.repo_info.as_ref().is_some_and(|r| !r.is_private);
        if !is_public {
            info!(delivery = ?Delivery::PrimaryOnly, message = "Event published");
            return Ok(Delivery::PrimaryOnly);
        }

        self.public_feed.publish(&message).await.map_err(|e| {
            warn!(feed = %FeedKind::PublicOnly, error = %e, message = "Publication failed");
            PublishError::PublicFeed { source: e }
        })?;

        info!(delivery = ?Delivery::PrimaryAndPublic, message = "Event published");
        Ok(Delivery::PrimaryAndPublic)
    }
}
