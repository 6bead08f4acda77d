//! Webhook event parser.

use std::fmt;

use hookbridge_crypto::Signature;
use time::OffsetDateTime;
use tracing::debug;

use crate::{
    constants::{GITHUB_EVENT_HEADER, GITHUB_SIGNATURE_256_HEADER, GITHUB_SIGNATURE_HEADER},
    AuthenticationError, DecodeError, Event, EventShape, RepoInfo, Result, WebhookRequest,
};

/// Parses authenticated webhook requests into events.
#[derive(Clone)]
pub struct EventParser {
    secret: String,
}

impl fmt::Debug for EventParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventParser")
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl EventParser {
    /// Creates a parser using the webhook shared secret.
    pub fn new<S: Into<String>>(secret: S) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Authenticate, decode and classify a webhook request.
    #[tracing::instrument(skip_all, fields(event_type = request.header(GITHUB_EVENT_HEADER)))]
    pub fn parse(&self, request: WebhookRequest, received: OffsetDateTime) -> Result<Event> {
        let signature = self.verify_signature(&request)?;

        let event_type = request
            .header(GITHUB_EVENT_HEADER)
            .ok_or(DecodeError::MissingEventType)?
            .to_string();

        let shape = EventShape::decode(&event_type, request.body())?;
        let event = Event {
            signature,
            event_type,
            received,
            payload: request.into_body(),
            repo_info: RepoInfo::from_shape(&shape),
        };
        debug!(shape = ?shape, event = %event, message = "Parsed event");

        Ok(event)
    }

    /// Verify the request signature, returning its hex digest.
    ///
    /// `X-Hub-Signature-256` takes precedence over `X-Hub-Signature`.
    fn verify_signature(&self, request: &WebhookRequest) -> Result<String, AuthenticationError> {
        let (header, value) = [GITHUB_SIGNATURE_256_HEADER, GITHUB_SIGNATURE_HEADER]
            .into_iter()
            .find_map(|name| request.header(name).map(|value| (name, value)))
            .ok_or(AuthenticationError::MissingSignature)?;

        let (algorithm, signature) = Signature::parse_header(value)
            .map_err(|e| AuthenticationError::from_crypto(header, e))?;

        match signature.is_valid(algorithm, request.body(), &self.secret) {
            Ok(true) => Ok(signature.0.to_string()),
            Ok(false) => Err(AuthenticationError::SignatureMismatch),
            Err(e) => Err(AuthenticationError::from_crypto(header, e)),
        }
    }
}
