//! Google Cloud Pub/Sub feed, over the REST API.

mod auth;
mod client;
mod errors;

pub use client::{PubSubClient, PubSubFeed};
pub use errors::PubSubError;
