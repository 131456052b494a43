//! Pitwall Data Models
//!
//! - Team: HTTP shapes of the Team record

mod team;

pub use team::*;
