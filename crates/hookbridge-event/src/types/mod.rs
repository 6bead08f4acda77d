//! GitHub webhook payload types.
//!
//! Only the fields needed for classification are decoded; everything else is
//! kept untouched in the raw payload.

mod common;
mod membership;
mod organization;
mod push;
mod repository_event;

pub use common::*;
pub use membership::*;
pub use organization::*;
pub use push::*;
pub use repository_event::*;
