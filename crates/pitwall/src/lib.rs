//! Pitwall Domain Library
//!
//! Core domain types and interfaces for the Pitwall team record service.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: The Team record and its validated candidate
//!   - `value_objects/`: Raw payloads and the validation mode
//!   - `services/`: Field validation rules
//!   - `events`: Per-operation events for the logging side-channel
//!   - `errors`: Domain and store error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `events`: Logging side-channel
//!
//! # Usage
//!
//! ```rust,ignore
//! use pitwall::{validate_team, TeamPayload, ValidationMode};
//!
//! let payload = TeamPayload::new("Ferrari", "Maranello", 16);
//! let candidate = validate_team(&payload, ValidationMode::Strict)?;
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    validate_key, validate_team, NewTeam, StoreError, Team, TeamError, TeamEvent, TeamOperation,
    TeamOutcome, TeamPayload, ValidationMode, MAX_FIELD_LEN, MIN_FIELD_LEN,
};
pub use ports::{NoopEventSink, TeamEventSink, TeamRepository};
