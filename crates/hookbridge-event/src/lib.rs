//! Webhook event parsing and classification.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod constants;
mod errors;
mod event;
mod parser;
mod repo_info;
mod request;
mod shape;
pub mod types;

#[cfg(test)]
mod tests;

pub use errors::{AuthenticationError, DecodeError, EventError, Result};
pub use event::Event;
pub use parser::EventParser;
pub use repo_info::RepoInfo;
pub use request::WebhookRequest;
pub use shape::{EventKind, EventShape};
