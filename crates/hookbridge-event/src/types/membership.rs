use serde::{Deserialize, Serialize};

use super::{null_as_default, GhUser};

/// GitHub Membership event (team membership changes).
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhMembershipEvent {
    /// Action.
    #[serde(default, deserialize_with = "null_as_default")]
    pub action: String,
    /// Member.
    #[serde(default)]
    pub member: Option<GhUser>,
    /// Organization.
    #[serde(default)]
    pub organization: Option<GhUser>,
}
