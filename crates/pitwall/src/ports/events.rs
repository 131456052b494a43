//! Event Sink Port
//!
//! Logging side-channel for Team operations. Injected into the service so
//! tests can substitute a silent or recording implementation.

use crate::domain::TeamEvent;

/// Receives one event per completed Team operation
pub trait TeamEventSink: Send + Sync {
    fn emit(&self, event: &TeamEvent);
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventSink;

impl TeamEventSink for NoopEventSink {
    fn emit(&self, _event: &TeamEvent) {}
}
