//! Event shapes.

use serde::Deserialize;

use crate::{
    types::{
        GhMembershipEvent, GhOrganizationEvent, GhPushEvent, GhRepository, GhRepositoryEvent,
        GhUser,
    },
    DecodeError,
};

/// Event kind, derived from the declared event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// `organization`.
    Organization,
    /// `membership`.
    Membership,
    /// `push`.
    Push,
    /// Any other event type.
    Other,
}

impl From<&str> for EventKind {
    fn from(value: &str) -> Self {
        match value {
            "organization" => Self::Organization,
            "membership" => Self::Membership,
            "push" => Self::Push,
            _ => Self::Other,
        }
    }
}

/// Structural shape of a decoded webhook payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventShape {
    /// Organization-level event, without repository.
    Organization {
        /// Organization.
        organization: GhUser,
    },
    /// Membership event, without repository.
    Membership {
        /// Organization.
        organization: GhUser,
    },
    /// Push event.
    Push {
        /// Repository.
        repository: GhRepository,
        /// Organization, if the repository belongs to one.
        organization: Option<GhUser>,
    },
    /// Any other event carrying a repository and an organization.
    RepositoryOrganization {
        /// Repository.
        repository: GhRepository,
        /// Organization.
        organization: GhUser,
    },
    /// Any other event carrying a repository only.
    Repository {
        /// Repository.
        repository: GhRepository,
    },
    /// No repository context.
    Unrecognized,
}

impl EventShape {
    /// Decode a payload according to its declared event type.
    pub fn decode(event_type: &str, body: &[u8]) -> Result<Self, DecodeError> {
        let shape = match EventKind::from(event_type) {
            EventKind::Organization => {
                let event: GhOrganizationEvent = decode_payload(event_type, body)?;
                Self::Organization {
                    organization: event.organization.unwrap_or_default(),
                }
            }
            EventKind::Membership => {
                let event: GhMembershipEvent = decode_payload(event_type, body)?;
                Self::Membership {
                    organization: event.organization.unwrap_or_default(),
                }
            }
            EventKind::Push => {
                let event: GhPushEvent = decode_payload(event_type, body)?;
                Self::Push {
                    repository: event.repository.unwrap_or_default(),
                    organization: event.organization,
                }
            }
            EventKind::Other => {
                let event: GhRepositoryEvent = decode_payload(event_type, body)?;
                match (event.repository, event.organization) {
                    (Some(repository), Some(organization)) => Self::RepositoryOrganization {
                        repository,
                        organization,
                    },
                    (Some(repository), None) => Self::Repository { repository },
                    (None, _) => Self::Unrecognized,
                }
            }
        };

        Ok(shape)
    }
}

fn decode_payload<'de, T>(event_type: &str, body: &'de [u8]) -> Result<T, DecodeError>
where
    T: Deserialize<'de>,
{
    serde_json::from_slice(body).map_err(|e| DecodeError::InvalidPayload {
        event_type: event_type.to_string(),
        source: e,
    })
}
