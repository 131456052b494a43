//! Domain Entities
//!
//! - Team: the single managed record, keyed by name

mod team;

pub use team::*;
