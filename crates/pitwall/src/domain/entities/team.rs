//! Team - The managed record
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Team - a persisted record, addressed by its unique `name`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// Storage-internal identifier, never used for addressing
    pub id: Uuid,
    pub name: String,
    pub base: String,
    pub championships_won: i64,
}

/// A validated candidate for insert or replacement.
///
/// Only produced by [`crate::validate_team`], so holding one means the
/// field-level rules (steps 1-6) have already passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeam {
    pub name: String,
    pub base: String,
    pub championships_won: i64,
}

impl Team {
    /// Materialize a candidate with a freshly generated ID
    pub fn new(candidate: NewTeam) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: candidate.name,
            base: candidate.base,
            championships_won: candidate.championships_won,
        }
    }

    /// Replace every mutable field, keeping the identity
    pub fn replace_with(&mut self, replacement: &NewTeam) {
        self.name.clone_from(&replacement.name);
        self.base.clone_from(&replacement.base);
        self.championships_won = replacement.championships_won;
    }
}
