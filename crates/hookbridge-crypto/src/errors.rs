//! Crypto errors.

use thiserror::Error;

/// Crypto error.
///
/// Variants never carry the secret or the digest itself.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Invalid signature format")]
    InvalidSignatureFormat,
    #[error("Unsupported signature algorithm '{algorithm}'")]
    UnsupportedAlgorithm { algorithm: String },
    #[error("Invalid HMAC secret key length")]
    InvalidSecretKeyLength,
}

/// Result alias for `CryptoError`.
pub type Result<T, E = CryptoError> = ::core::result::Result<T, E>;
