//! Feed interface

#![warn(missing_docs)]
#![warn(clippy::all)]

mod errors;
mod interface;
mod message;

pub use errors::{FeedError, Result};
#[cfg(any(test, feature = "testkit"))]
pub use interface::MockFeed;
pub use interface::Feed;
pub use message::{Attributes, FeedMessage};
