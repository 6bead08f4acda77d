//! Feed message.

use std::collections::BTreeMap;

/// Message attributes.
pub type Attributes = BTreeMap<String, String>;

/// Message published on a feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedMessage {
    /// Serialized body.
    pub data: Vec<u8>,
    /// Metadata attributes.
    pub attributes: Attributes,
}

impl FeedMessage {
    /// Creates a new message.
    pub fn new(data: Vec<u8>, attributes: Attributes) -> Self {
        Self { data, attributes }
    }
}
