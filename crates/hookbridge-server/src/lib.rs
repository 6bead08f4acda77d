//! Server module.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
mod feed;
mod health;
pub(crate) mod metrics;
pub mod server;
mod webhook;

#[cfg(test)]
mod tests;

pub use errors::{Result, ServerError};
pub use feed::MetricsFeed;
pub use server::{run_bot_server, AppContext};
