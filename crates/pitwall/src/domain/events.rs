//! Team Events
//!
//! One event per Team operation, handed to a [`crate::TeamEventSink`] once
//! the outcome is known.

use std::fmt;

use crate::domain::TeamError;

/// The five Team operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamOperation {
    Create,
    FindAll,
    FindOne,
    Update,
    Delete,
}

impl TeamOperation {
    /// HTTP route the operation is served on
    pub fn route(&self) -> &'static str {
        match self {
            TeamOperation::Create => "POST /teams",
            TeamOperation::FindAll => "GET /teams",
            TeamOperation::FindOne => "GET /teams/:name",
            TeamOperation::Update => "PUT /teams/:name",
            TeamOperation::Delete => "DELETE /teams/:name",
        }
    }

    fn past_tense(&self) -> &'static str {
        match self {
            TeamOperation::Create => "created",
            TeamOperation::FindAll | TeamOperation::FindOne => "retrieved",
            TeamOperation::Update => "updated",
            TeamOperation::Delete => "deleted",
        }
    }
}

impl fmt::Display for TeamOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamOperation::Create => write!(f, "create"),
            TeamOperation::FindAll => write!(f, "find_all"),
            TeamOperation::FindOne => write!(f, "find_one"),
            TeamOperation::Update => write!(f, "update"),
            TeamOperation::Delete => write!(f, "delete"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamOutcome {
    Succeeded,
    Rejected(TeamError),
}

/// What happened, to which team, and how it ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamEvent {
    pub operation: TeamOperation,
    pub key: Option<String>,
    pub outcome: TeamOutcome,
}

impl TeamEvent {
    pub fn new<T>(
        operation: TeamOperation,
        key: Option<&str>,
        result: &Result<T, TeamError>,
    ) -> Self {
        Self {
            operation,
            key: key.map(str::to_string),
            outcome: match result {
                Ok(_) => TeamOutcome::Succeeded,
                Err(e) => TeamOutcome::Rejected(e.clone()),
            },
        }
    }

    pub fn error(&self) -> Option<&TeamError> {
        match &self.outcome {
            TeamOutcome::Succeeded => None,
            TeamOutcome::Rejected(e) => Some(e),
        }
    }
}

impl fmt::Display for TeamEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.outcome, &self.key) {
            (TeamOutcome::Rejected(e), Some(key)) => {
                write!(f, "{} {} {}", self.operation.route(), key, e)
            }
            (TeamOutcome::Rejected(e), None) => write!(f, "{} {}", self.operation.route(), e),
            (TeamOutcome::Succeeded, _) if self.operation == TeamOperation::FindAll => {
                write!(f, "All teams retrieved")
            }
            (TeamOutcome::Succeeded, Some(key)) => {
                write!(f, "{} team {}", key, self.operation.past_tense())
            }
            (TeamOutcome::Succeeded, None) => write!(f, "Team {}", self.operation.past_tense()),
        }
    }
}
