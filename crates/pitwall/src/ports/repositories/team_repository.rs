//! Team Repository Port
//!
//! Abstract interface for Team persistence operations.

use async_trait::async_trait;

use crate::domain::{NewTeam, StoreError, Team};

/// Repository interface for Team records, keyed by name.
///
/// Absence is `Ok(None)`; `Err` is reserved for genuine store failures.
/// Implementations must enforce name uniqueness themselves and report a
/// violation as [`StoreError::Conflict`].
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Insert a new Team, generating its internal ID
    async fn insert(&self, candidate: &NewTeam) -> Result<Team, StoreError>;

    /// Find all Teams, in insertion order
    async fn find_all(&self) -> Result<Vec<Team>, StoreError>;

    /// Find a Team by name
    async fn find_by_name(&self, name: &str) -> Result<Option<Team>, StoreError>;

    /// Replace every mutable field of the Team keyed by `name`
    async fn update_by_name(
        &self,
        name: &str,
        replacement: &NewTeam,
    ) -> Result<Option<Team>, StoreError>;

    /// Remove the Team keyed by `name`, returning it
    async fn delete_by_name(&self, name: &str) -> Result<Option<Team>, StoreError>;
}
