use serde::{Deserialize, Serialize};

use super::{null_as_default, GhUser};

/// GitHub Organization event.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhOrganizationEvent {
    /// Action.
    #[serde(default, deserialize_with = "null_as_default")]
    pub action: String,
    /// Organization.
    #[serde(default)]
    pub organization: Option<GhUser>,
}
