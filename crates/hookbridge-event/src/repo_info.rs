//! Repository classification.

use crate::{
    types::{GhRepository, GhUser},
    EventShape,
};

/// Information about the repository (and organization) an event comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoInfo {
    /// Whether the repository is not public.
    pub is_private: bool,
    /// Repository name.
    pub name: String,
    /// Repository owner login.
    pub owner_name: String,
    /// Organization login.
    pub organization_name: String,
}

impl RepoInfo {
    /// Classify a decoded event shape.
    ///
    /// Returns `None` for unrecognized shapes.
    pub fn from_shape(shape: &EventShape) -> Option<Self> {
        match shape {
            EventShape::Organization { organization } => Some(Self {
                is_private: false,
                organization_name: organization.login.clone(),
                ..Default::default()
            }),
            // Membership events are always considered private, whatever the
            // team visibility. Still to be checked against GitHub semantics.
            EventShape::Membership { organization } => Some(Self {
                is_private: true,
                organization_name: organization.login.clone(),
                ..Default::default()
            }),
            EventShape::Push {
                repository,
                organization,
            } => Some(Self::from_repository(repository, organization.as_ref())),
            EventShape::RepositoryOrganization {
                repository,
                organization,
            } => Some(Self::from_repository(repository, Some(organization))),
            EventShape::Repository { repository } => Some(Self::from_repository(repository, None)),
            EventShape::Unrecognized => None,
        }
    }

    fn from_repository(repository: &GhRepository, organization: Option<&GhUser>) -> Self {
        Self {
            is_private: repository.private,
            name: repository.name.clone(),
            owner_name: repository.owner_login().to_string(),
            organization_name: organization.map(|o| o.login.clone()).unwrap_or_default(),
        }
    }
}
