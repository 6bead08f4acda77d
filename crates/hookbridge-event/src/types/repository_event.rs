use serde::{Deserialize, Serialize};

use super::{GhRepository, GhUser};

/// Any other GitHub event, reduced to its repository and organization.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GhRepositoryEvent {
    /// Repository.
    pub repository: Option<GhRepository>,
    /// Organization.
    pub organization: Option<GhUser>,
}
