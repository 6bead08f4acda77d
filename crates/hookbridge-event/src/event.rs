//! Parsed webhook event.

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Serialize, Serializer};
use time::OffsetDateTime;

use crate::{constants::DISPLAY_PAYLOAD_MAX_CHARS, RepoInfo};

/// Parsed representation of a GitHub webhook event.
///
/// Serializes as `{"Signature", "Type", "Received", "Payload"}`, the payload
/// being base64-encoded. Repository information is routing metadata and is
/// never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Event {
    /// Hex digest of the verified signature header.
    pub signature: String,
    /// Declared event type.
    #[serde(rename = "Type")]
    pub event_type: String,
    /// Reception time.
    #[serde(with = "time::serde::rfc3339")]
    pub received: OffsetDateTime,
    /// Raw verified body.
    #[serde(serialize_with = "serialize_payload")]
    pub payload: Vec<u8>,
    /// Repository classification.
    #[serde(skip)]
    pub repo_info: Option<RepoInfo>,
}

fn serialize_payload<S>(payload: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&STANDARD.encode(payload))
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let payload = String::from_utf8_lossy(&self.payload);
        let payload = if payload.chars().count() > DISPLAY_PAYLOAD_MAX_CHARS {
            let mut truncated: String = payload.chars().take(DISPLAY_PAYLOAD_MAX_CHARS).collect();
            truncated.push('…');
            truncated
        } else {
            payload.into_owned()
        };

        writeln!(f, "{{")?;
        writeln!(f, "  Signature: {},", self.signature)?;
        writeln!(f, "  Type: {},", self.event_type)?;
        writeln!(f, "  Received: {},", self.received)?;
        writeln!(f, "  Payload: {},", payload)?;
        writeln!(f, "  Repository: {:?},", self.repo_info)?;
        write!(f, "}}")
    }
}
