//! In-memory implementation of TeamRepository
//!
//! Same contract as the PostgreSQL adapter, including the unique-name
//! constraint. Records live only as long as the process.

use async_trait::async_trait;
use tokio::sync::RwLock;

use pitwall::{NewTeam, StoreError, Team, TeamRepository};

/// In-memory implementation of TeamRepository
#[derive(Default)]
pub struct InMemoryTeamRepository {
    teams: RwLock<Vec<Team>>,
}

impl InMemoryTeamRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn name_taken(name: &str) -> StoreError {
    StoreError::Conflict(format!("team name '{}' is already taken", name))
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn insert(&self, candidate: &NewTeam) -> Result<Team, StoreError> {
        let mut teams = self.teams.write().await;
        if teams.iter().any(|t| t.name == candidate.name) {
            return Err(name_taken(&candidate.name));
        }

        let team = Team::new(candidate.clone());
        teams.push(team.clone());
        Ok(team)
    }

    async fn find_all(&self) -> Result<Vec<Team>, StoreError> {
        Ok(self.teams.read().await.clone())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Team>, StoreError> {
        let teams = self.teams.read().await;
        Ok(teams.iter().find(|t| t.name == name).cloned())
    }

    async fn update_by_name(
        &self,
        name: &str,
        replacement: &NewTeam,
    ) -> Result<Option<Team>, StoreError> {
        let mut teams = self.teams.write().await;
        let Some(index) = teams.iter().position(|t| t.name == name) else {
            return Ok(None);
        };

        let clashes = teams
            .iter()
            .enumerate()
            .any(|(i, t)| i != index && t.name == replacement.name);
        if clashes {
            return Err(name_taken(&replacement.name));
        }

        let team = &mut teams[index];
        team.replace_with(replacement);
        Ok(Some(team.clone()))
    }

    async fn delete_by_name(&self, name: &str) -> Result<Option<Team>, StoreError> {
        let mut teams = self.teams.write().await;
        Ok(teams
            .iter()
            .position(|t| t.name == name)
            .map(|index| teams.remove(index)))
    }
}
