//! Core module.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod attributes;
mod errors;
mod publisher;

pub use attributes::extract_attributes;
pub use errors::{PublishError, Result};
pub use publisher::{Delivery, FanoutPublisher, FeedKind};
