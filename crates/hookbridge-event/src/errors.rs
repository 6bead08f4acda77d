//! Event errors.

use hookbridge_crypto::CryptoError;
use thiserror::Error;

/// Authentication error.
///
/// Never carries payload, digest or secret material.
#[allow(missing_docs)]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthenticationError {
    #[error("Missing webhook signature.")]
    MissingSignature,
    #[error("Invalid webhook signature format in header '{header}'.")]
    InvalidSignatureFormat { header: &'static str },
    #[error("Unsupported webhook signature algorithm '{algorithm}'.")]
    UnsupportedAlgorithm { algorithm: String },
    #[error("Invalid webhook signature.")]
    SignatureMismatch,
}

impl AuthenticationError {
    pub(crate) fn from_crypto(header: &'static str, error: CryptoError) -> Self {
        match error {
            CryptoError::UnsupportedAlgorithm { algorithm } => {
                Self::UnsupportedAlgorithm { algorithm }
            }
            CryptoError::InvalidSignatureFormat => Self::InvalidSignatureFormat { header },
            CryptoError::InvalidSecretKeyLength => Self::SignatureMismatch,
        }
    }
}

/// Decode error, for authenticated payloads which do not match their declared type.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Missing webhook event type.")]
    MissingEventType,
    /// The parser error is only kept as the source, so it stays out of responses.
    #[error("Invalid payload for event type {event_type}.")]
    InvalidPayload {
        event_type: String,
        source: serde_json::Error,
    },
}

/// Event parsing error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum EventError {
    #[error("Error validating payload: {source}")]
    Authentication { source: AuthenticationError },
    #[error("Error parsing payload: {source}")]
    Decode { source: DecodeError },
}

impl From<AuthenticationError> for EventError {
    fn from(e: AuthenticationError) -> Self {
        Self::Authentication { source: e }
    }
}

impl From<DecodeError> for EventError {
    fn from(e: DecodeError) -> Self {
        Self::Decode { source: e }
    }
}

/// Result alias for `EventError`.
pub type Result<T, E = EventError> = core::result::Result<T, E>;
