//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod logging;
pub mod memory;
pub mod postgres;

// Re-exports
pub use logging::TracingEventSink;
pub use memory::InMemoryTeamRepository;
pub use postgres::PgTeamRepository;
