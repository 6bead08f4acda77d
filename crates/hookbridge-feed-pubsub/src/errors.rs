use hookbridge_feed_interface::FeedError;

#[derive(Debug, thiserror::Error)]
pub enum PubSubError {
    #[error(transparent)]
    HttpError { source: reqwest::Error },

    #[error("Metadata server answered with status {status}")]
    MetadataError { status: u16 },

    #[error("Static token source selected, but PUBSUB_ACCESS_TOKEN is empty")]
    MissingStaticToken,
}

impl From<reqwest::Error> for PubSubError {
    fn from(e: reqwest::Error) -> Self {
        PubSubError::HttpError { source: e }
    }
}

impl From<PubSubError> for FeedError {
    fn from(e: PubSubError) -> Self {
        FeedError::AuthenticationError { source: e.into() }
    }
}
