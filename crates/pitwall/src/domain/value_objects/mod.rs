//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod team_payload;
mod validation_mode;

pub(crate) use team_payload::is_truthy;
pub use team_payload::TeamPayload;
pub use validation_mode::*;
