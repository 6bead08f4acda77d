//! Access tokens.

use std::time::{SystemTime, UNIX_EPOCH};

use hookbridge_config::{FeedPubSubConfig, TokenSource};
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::errors::PubSubError;

const METADATA_TOKEN_PATH: &str = "/computeMetadata/v1/instance/service-accounts/default/token";
const ACCESS_TOKEN_RENEW_THRESHOLD: f32 = 0.5;

#[derive(Default)]
struct LastAccessToken {
    token: String,
    renew_at: u64,
}

#[derive(Debug, Deserialize)]
struct MetadataTokenResponse {
    access_token: String,
    expires_in: u64,
}

/// Provides bearer tokens for the Pub/Sub API.
pub(crate) struct TokenProvider {
    source: TokenSource,
    static_token: String,
    metadata_url: String,
    last_token: RwLock<LastAccessToken>,
}

impl TokenProvider {
    pub fn new(config: &FeedPubSubConfig) -> Self {
        Self {
            source: config.effective_token_source(),
            static_token: config.access_token.clone(),
            metadata_url: config.metadata_url.trim_end_matches('/').to_string(),
            last_token: RwLock::new(LastAccessToken::default()),
        }
    }

    /// Get a bearer token, if the source needs one.
    pub async fn token(&self, client: &Client) -> Result<Option<String>, PubSubError> {
        match self.source {
            TokenSource::None => Ok(None),
            TokenSource::Static => {
                if self.static_token.is_empty() {
                    Err(PubSubError::MissingStaticToken)
                } else {
                    Ok(Some(self.static_token.clone()))
                }
            }
            TokenSource::Metadata => self.get_or_fetch_metadata_token(client).await.map(Some),
        }
    }

    async fn get_or_fetch_metadata_token(&self, client: &Client) -> Result<String, PubSubError> {
        {
            let last = self.last_token.read().await;
            if !last.token.is_empty() && now_timestamp() < last.renew_at {
                return Ok(last.token.clone());
            }
        }

        let mut last = self.last_token.write().await;
        // Another task may have renewed it while we waited for the lock.
        let now = now_timestamp();
        if !last.token.is_empty() && now < last.renew_at {
            return Ok(last.token.clone());
        }

        let response = self.fetch_metadata_token(client).await?;
        last.token = response.access_token.clone();
        last.renew_at =
            now + (response.expires_in as f32 * ACCESS_TOKEN_RENEW_THRESHOLD) as u64;

        Ok(response.access_token)
    }

    #[tracing::instrument(skip_all)]
    async fn fetch_metadata_token(
        &self,
        client: &Client,
    ) -> Result<MetadataTokenResponse, PubSubError> {
        let response = client
            .get(format!("{}{}", self.metadata_url, METADATA_TOKEN_PATH))
            .header("Metadata-Flavor", "Google")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PubSubError::MetadataError {
                status: status.as_u16(),
            });
        }

        let response: MetadataTokenResponse = response.json().await?;
        tracing::debug!(
            expires_in = response.expires_in,
            message = "Fetched access token from metadata server"
        );

        Ok(response)
    }
}

fn now_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
