//! Pub/Sub publisher.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use hookbridge_config::Config;
use hookbridge_feed_interface::{Attributes, Feed, FeedError, FeedMessage, Result};
use reqwest::{Client, ClientBuilder};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{auth::TokenProvider, errors::PubSubError};

#[derive(Debug, Serialize)]
struct PublishRequest<'a> {
    messages: [PubsubMessage<'a>; 1],
}

#[derive(Debug, Serialize)]
struct PubsubMessage<'a> {
    data: String,
    attributes: &'a Attributes,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PublishResponse {
    #[serde(default)]
    message_ids: Vec<String>,
}

struct ClientInner {
    http: Client,
    tokens: TokenProvider,
    root_url: String,
    project: String,
}

/// Pub/Sub REST client, shared by every topic.
#[derive(Clone)]
pub struct PubSubClient {
    inner: Arc<ClientInner>,
}

impl PubSubClient {
    /// Build a client from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let pubsub = &config.feed.pubsub;
        let http = ClientBuilder::new()
            .connect_timeout(Duration::from_millis(pubsub.connect_timeout))
            .timeout(Duration::from_millis(pubsub.timeout))
            .user_agent(format!("hookbridge/{}", config.version))
            .build()
            .map_err(|e| FeedError::ImplementationError {
                source: PubSubError::from(e).into(),
            })?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                tokens: TokenProvider::new(pubsub),
                root_url: pubsub.effective_root_url(),
                project: pubsub.project.clone(),
            }),
        })
    }

    /// Get a feed publishing to a topic.
    pub fn topic<T: Into<String>>(&self, name: T) -> PubSubFeed {
        let topic = name.into();
        let url = format!(
            "{}/v1/projects/{}/topics/{}:publish",
            self.inner.root_url, self.inner.project, topic
        );

        PubSubFeed {
            client: self.clone(),
            topic,
            url,
        }
    }
}

/// Feed publishing to one Pub/Sub topic.
pub struct PubSubFeed {
    client: PubSubClient,
    topic: String,
    url: String,
}

impl PubSubFeed {
    /// Topic name.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    fn http_error<E>(&self, e: E) -> FeedError
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        FeedError::HttpError {
            feed: self.topic.clone(),
            source: e.into(),
        }
    }
}

#[async_trait]
impl Feed for PubSubFeed {
    #[tracing::instrument(skip_all, fields(feed = self.topic))]
    async fn publish(&self, message: &FeedMessage) -> Result<()> {
        let inner = &self.client.inner;
        let body = PublishRequest {
            messages: [PubsubMessage {
                data: STANDARD.encode(&message.data),
                attributes: &message.attributes,
            }],
        };

        let mut request = inner.http.post(&self.url).json(&body);
        if let Some(token) = inner.tokens.token(&inner.http).await? {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| self.http_error(e))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Rejected {
                feed: self.topic.clone(),
                status: status.as_u16(),
                body,
            });
        }

        let response: PublishResponse = response.json().await.map_err(|e| self.http_error(e))?;
        debug!(
            message_ids = ?response.message_ids,
            message = "Message published"
        );

        Ok(())
    }
}
