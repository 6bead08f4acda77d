//! Validation utilities.

use std::fmt::Write;

use hookbridge_config::{Config, FeedDriver, TokenSource};
use hookbridge_sentry::parse_dsn;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{}", errors)]
    EnvVarsError { errors: String },
}

fn validate_env_vars(config: &Config) -> Result<(), ValidationError> {
    #[inline]
    fn _missing(error: &mut String, name: &str) {
        error.push('\n');
        let _ = write!(error, "  - Missing env. var.: {}", name);
    }

    #[inline]
    fn _invalid(error: &mut String, name: &str) {
        error.push('\n');
        let _ = write!(error, "  - Invalid env. var.: {}", name);
    }

    let mut error = String::new();

    // Check server configuration
    if config.server.bind_port == 0 {
        _invalid(&mut error, "PORT");
    }
    if config.server.webhook_secret.is_empty() {
        _missing(&mut error, "WEBHOOK_SECRET");
    }
    if config.server.max_payload_size == 0 {
        _invalid(&mut error, "MAX_PAYLOAD_SIZE");
    }

    // Check Pub/Sub configuration
    if config.feed.driver == FeedDriver::PubSub {
        let pubsub = &config.feed.pubsub;
        if pubsub.project.is_empty() {
            _missing(&mut error, "GCP_PROJECT");
        }
        if pubsub.effective_token_source() == TokenSource::Static && pubsub.access_token.is_empty()
        {
            _missing(&mut error, "PUBSUB_ACCESS_TOKEN");
        }
    }

    // Check topics
    if config.feed.topic.is_empty() {
        _missing(&mut error, "TOPIC");
    }
    if config.feed.public_topic.is_empty() {
        _missing(&mut error, "PUBLIC_TOPIC");
    }

    // Check Sentry configuration
    if !config.sentry.url.is_empty() && parse_dsn(&config.sentry.url).is_err() {
        _invalid(&mut error, "SENTRY_URL");
    }

    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError { errors: error })
    }
}

/// Validate configuration.
pub fn validate_configuration(config: &Config) -> Result<(), ValidationError> {
    validate_env_vars(config)
}
