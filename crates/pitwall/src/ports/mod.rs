//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with external systems (store, logging).
//!
//! Implementations of these traits live in the infrastructure layer.

pub mod events;
pub mod repositories;

// Re-exports
pub use events::*;
pub use repositories::*;
