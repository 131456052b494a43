//! Tracing-backed event sink
//!
//! Successes log at info, client rejections at warn, internal failures at
//! error with their cause.

use pitwall::{TeamError, TeamEvent, TeamEventSink};

/// Writes Team events through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl TeamEventSink for TracingEventSink {
    fn emit(&self, event: &TeamEvent) {
        let team = event.key.as_deref().unwrap_or("-");

        match event.error() {
            None => tracing::info!(operation = %event.operation, team, "{}", event),
            Some(TeamError::Internal { cause }) => {
                tracing::error!(operation = %event.operation, team, cause = %cause, "{}", event)
            }
            Some(_) => tracing::warn!(operation = %event.operation, team, "{}", event),
        }
    }
}
