use std::{fmt, str::FromStr};

use hmac::{Mac, SimpleHmac};
use sha1::Sha1;
use sha2::Sha256;

use super::errors::CryptoError;

/// HMAC algorithm used to sign a webhook body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureAlgorithm {
    /// `sha1=...`, sent in `X-Hub-Signature`.
    Sha1,
    /// `sha256=...`, sent in `X-Hub-Signature-256`.
    Sha256,
}

impl SignatureAlgorithm {
    /// Convert algorithm to static str.
    pub fn to_str(self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
        }
    }
}

impl fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for SignatureAlgorithm {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sha1" => Ok(Self::Sha1),
            "sha256" => Ok(Self::Sha256),
            other => Err(CryptoError::UnsupportedAlgorithm {
                algorithm: other.to_string(),
            }),
        }
    }
}

/// Signature, as an hex-encoded digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature<'a>(pub &'a str);

impl<'a> Signature<'a> {
    /// Split a signature header value (`algorithm=hexdigest`).
    pub fn parse_header(value: &'a str) -> Result<(SignatureAlgorithm, Self), CryptoError> {
        let (algorithm, digest) = value
            .split_once('=')
            .ok_or(CryptoError::InvalidSignatureFormat)?;

        if digest.is_empty() || digest.contains('=') {
            return Err(CryptoError::InvalidSignatureFormat);
        }

        Ok((algorithm.parse()?, Self(digest)))
    }

    /// Check if a signature is valid.
    pub fn is_valid(
        &self,
        algorithm: SignatureAlgorithm,
        body: &[u8],
        secret: &str,
    ) -> Result<bool, CryptoError> {
        let decoded_signature =
            hex::decode(self.0).map_err(|_| CryptoError::InvalidSignatureFormat)?;

        match algorithm {
            SignatureAlgorithm::Sha1 => {
                let mut hmac = new_hmac::<Sha1>(secret)?;
                hmac.update(body);
                Ok(hmac.verify_slice(&decoded_signature).is_ok())
            }
            SignatureAlgorithm::Sha256 => {
                let mut hmac = new_hmac::<Sha256>(secret)?;
                hmac.update(body);
                Ok(hmac.verify_slice(&decoded_signature).is_ok())
            }
        }
    }

    /// Compute the hex-encoded signature of a body.
    pub fn compute(
        algorithm: SignatureAlgorithm,
        body: &[u8],
        secret: &str,
    ) -> Result<String, CryptoError> {
        let code = match algorithm {
            SignatureAlgorithm::Sha1 => {
                let mut hmac = new_hmac::<Sha1>(secret)?;
                hmac.update(body);
                hmac.finalize().into_bytes().to_vec()
            }
            SignatureAlgorithm::Sha256 => {
                let mut hmac = new_hmac::<Sha256>(secret)?;
                hmac.update(body);
                hmac.finalize().into_bytes().to_vec()
            }
        };

        Ok(hex::encode(code))
    }

    /// Compute a full signature header value (`algorithm=hexdigest`).
    pub fn compute_header(
        algorithm: SignatureAlgorithm,
        body: &[u8],
        secret: &str,
    ) -> Result<String, CryptoError> {
        Ok(format!("{}={}", algorithm, Self::compute(algorithm, body, secret)?))
    }
}

fn new_hmac<D>(secret: &str) -> Result<SimpleHmac<D>, CryptoError>
where
    D: hmac::digest::Digest + hmac::digest::core_api::BlockSizeUser,
{
    SimpleHmac::<D>::new_from_slice(secret.as_bytes())
        .map_err(|_| CryptoError::InvalidSecretKeyLength)
}
