use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DriverError {
    #[error("Invalid driver kind: {kind}")]
    InvalidDriverKind { kind: String },
    #[error("Invalid token source: {kind}")]
    InvalidTokenSource { kind: String },
}

/// Feed driver, selecting the transport behind both feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedDriver {
    Null,
    PubSub,
}

impl FromStr for FeedDriver {
    type Err = DriverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &s.to_lowercase()[..] {
            "null" => Ok(Self::Null),
            "pubsub" => Ok(Self::PubSub),
            _ => Err(DriverError::InvalidDriverKind { kind: s.into() }),
        }
    }
}

/// Where the Pub/Sub transport gets its bearer token from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    /// No authentication (emulator).
    None,
    /// Token given in configuration.
    Static,
    /// Token fetched from the compute metadata server.
    Metadata,
}

impl FromStr for TokenSource {
    type Err = DriverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &s.to_lowercase()[..] {
            "none" => Ok(Self::None),
            "static" => Ok(Self::Static),
            "metadata" => Ok(Self::Metadata),
            _ => Err(DriverError::InvalidTokenSource { kind: s.into() }),
        }
    }
}
