//! Config module.

mod drivers;

use std::{env, str::FromStr};

pub use drivers::{DriverError, FeedDriver, TokenSource};
use thiserror::Error;

/// Default primary topic.
pub const DEFAULT_TOPIC: &str = "githubevent";
/// Default public-only topic.
pub const DEFAULT_PUBLIC_TOPIC: &str = "githubevent-public";
/// Default log filter, used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,hookbridge=debug";
/// GitHub caps webhook payloads at 25 MiB.
pub const DEFAULT_MAX_PAYLOAD_SIZE: usize = 25 * 1024 * 1024;

/// Config error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for env. var. '{name}': {source}")]
    DriverError { name: String, source: DriverError },
}

#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Feed driver.
    pub driver: FeedDriver,
    /// Primary topic, receiving every event.
    pub topic: String,
    /// Public-only topic, receiving events from public repositories.
    pub public_topic: String,
    /// Pub/Sub options.
    pub pubsub: FeedPubSubConfig,
}

#[derive(Debug, Clone)]
pub struct FeedPubSubConfig {
    /// Target project.
    pub project: String,
    /// Pub/Sub API root URL.
    pub root_url: String,
    /// Emulator host (`host:port`).
    pub emulator_host: String,
    /// Token source.
    pub token_source: TokenSource,
    /// Static access token.
    pub access_token: String,
    /// Metadata server root URL.
    pub metadata_url: String,
    /// Connect timeout (in milliseconds).
    pub connect_timeout: u64,
    /// Total request timeout, including token fetches (in milliseconds).
    pub timeout: u64,
}

impl FeedPubSubConfig {
    /// Effective API root URL, taking the emulator into account.
    pub fn effective_root_url(&self) -> String {
        if self.emulator_host.is_empty() {
            self.root_url.trim_end_matches('/').to_string()
        } else {
            format!("http://{}", self.emulator_host)
        }
    }

    /// Effective token source, taking the emulator into account.
    pub fn effective_token_source(&self) -> TokenSource {
        if self.emulator_host.is_empty() {
            self.token_source
        } else {
            TokenSource::None
        }
    }
}

#[derive(Debug, Clone)]
pub struct SentryConfig {
    /// Sentry URL.
    pub url: String,
    /// Traces sample rate (between 0 and 1) for Sentry
    pub traces_sample_rate: f32,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
    /// Log filter, in `EnvFilter` syntax.
    pub filter: String,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind IP.
    pub bind_ip: String,
    /// Server bind port.
    pub bind_port: u16,
    /// Server workers count.
    pub workers_count: Option<u16>,
    /// Maximum accepted webhook body size, in bytes.
    pub max_payload_size: usize,
    /// Server webhook secret.
    pub webhook_secret: String,
}

/// Bridge configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Feed options.
    pub feed: FeedConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// Sentry options.
    pub sentry: SentryConfig,
    /// Server options.
    pub server: ServerConfig,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Result<Config, ConfigError> {
        Self::from_lookup(version, |name| env::var(name).ok())
    }

    /// Create configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(version: String, lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars(lookup);

        Ok(Config {
            feed: FeedConfig {
                driver: vars.parse("FEED_DRIVER", "pubsub")?,
                topic: vars.to_str("TOPIC", DEFAULT_TOPIC),
                public_topic: vars.to_str("PUBLIC_TOPIC", DEFAULT_PUBLIC_TOPIC),
                pubsub: FeedPubSubConfig {
                    project: vars.to_str("GCP_PROJECT", ""),
                    root_url: vars.to_str("PUBSUB_ROOT_URL", "https://pubsub.googleapis.com"),
                    emulator_host: vars.to_str("PUBSUB_EMULATOR_HOST", ""),
                    token_source: vars.parse("PUBSUB_TOKEN_SOURCE", "metadata")?,
                    access_token: vars.to_str("PUBSUB_ACCESS_TOKEN", ""),
                    metadata_url: vars
                        .to_str("PUBSUB_METADATA_URL", "http://metadata.google.internal"),
                    connect_timeout: vars.to_u64("PUBSUB_CONNECT_TIMEOUT", 5000),
                    timeout: vars.to_u64("PUBSUB_TIMEOUT", 10000),
                },
            },
            logging: LoggingConfig {
                use_bunyan: vars.to_bool("LOGGING_USE_BUNYAN", false),
                filter: vars.to_str("RUST_LOG", DEFAULT_LOG_FILTER),
            },
            sentry: SentryConfig {
                url: vars.to_str("SENTRY_URL", ""),
                traces_sample_rate: vars.to_f32("SENTRY_TRACES_SAMPLE_RATE", 0.0),
            },
            server: ServerConfig {
                bind_ip: vars.to_str("BIND_IP", "0.0.0.0"),
                bind_port: vars.to_u16("PORT", 8080),
                workers_count: vars.to_optional_u16("WORKERS_COUNT", None),
                max_payload_size: vars.to_usize("MAX_PAYLOAD_SIZE", DEFAULT_MAX_PAYLOAD_SIZE),
                webhook_secret: vars.to_str("WEBHOOK_SECRET", ""),
            },
            version,
        })
    }
}

struct Vars<F>(F);

impl<F> Vars<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, name: &str) -> Option<String> {
        (self.0)(name).filter(|v| !v.is_empty())
    }

    fn parse<T>(&self, name: &str, default: &str) -> Result<T, ConfigError>
    where
        T: FromStr<Err = DriverError>,
    {
        T::from_str(&self.to_str(name, default)).map_err(|e| ConfigError::DriverError {
            name: name.into(),
            source: e,
        })
    }

    fn to_u16(&self, name: &str, default: u16) -> u16 {
        self.get(name)
            .map(|e| e.parse().unwrap_or(default))
            .unwrap_or(default)
    }

    fn to_optional_u16(&self, name: &str, default: Option<u16>) -> Option<u16> {
        self.get(name)
            .map(|e| e.parse::<u16>().map(Some).unwrap_or(default))
            .unwrap_or(default)
    }

    fn to_u64(&self, name: &str, default: u64) -> u64 {
        self.get(name)
            .map(|e| e.parse().unwrap_or(default))
            .unwrap_or(default)
    }

    fn to_usize(&self, name: &str, default: usize) -> usize {
        self.get(name)
            .map(|e| e.parse().unwrap_or(default))
            .unwrap_or(default)
    }

    fn to_f32(&self, name: &str, default: f32) -> f32 {
        self.get(name)
            .map(|e| e.parse().unwrap_or(default))
            .unwrap_or(default)
    }

    fn to_bool(&self, name: &str, default: bool) -> bool {
        self.get(name).map(|_| true).unwrap_or(default)
    }

    fn to_str(&self, name: &str, default: &str) -> String {
        self.get(name).unwrap_or_else(|| default.to_string())
    }
}
