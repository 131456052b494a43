//! Application Layer (Use Cases)
//!
//! Orchestrates domain rules and coordinates between
//! the Team repository and the event sink.

mod team_service;

pub use team_service::TeamService;
