//! Sentry module.

mod client;
mod debug;

pub use client::{parse_dsn, with_sentry_configuration};
pub use debug::send_test_event;
