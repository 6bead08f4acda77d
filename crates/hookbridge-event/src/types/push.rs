use serde::{Deserialize, Serialize};

use super::{null_as_default, GhRepository, GhUser};

/// GitHub Push event.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhPushEvent {
    /// Reference.
    #[serde(rename = "ref", default, deserialize_with = "null_as_default")]
    pub reference: String,
    /// Repository.
    #[serde(default)]
    pub repository: Option<GhRepository>,
    /// Organization.
    #[serde(default)]
    pub organization: Option<GhUser>,
}
