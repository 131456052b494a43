//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod team_repository;

pub use team_repository::*;
