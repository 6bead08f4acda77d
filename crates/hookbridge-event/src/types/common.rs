use serde::{Deserialize, Deserializer, Serialize};

/// Decode `null` as the default value, as the platform sends either.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// GitHub User, or organization account.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GhUser {
    /// Username.
    #[serde(deserialize_with = "null_as_default")]
    pub login: String,
}

/// GitHub Repository.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GhRepository {
    /// Name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Private.
    #[serde(deserialize_with = "null_as_default")]
    pub private: bool,
    /// Owner.
    pub owner: Option<GhUser>,
}

impl GhRepository {
    /// Owner login, or an empty string.
    pub fn owner_login(&self) -> &str {
        self.owner.as_ref().map(|o| o.login.as_str()).unwrap_or_default()
    }
}
