//! Test doubles shared by the service and route tests

use std::sync::Mutex;

use async_trait::async_trait;

use pitwall::{NewTeam, StoreError, Team, TeamEvent, TeamEventSink, TeamRepository};

use crate::adapters::InMemoryTeamRepository;

/// Keeps every emitted event for later inspection
#[derive(Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<TeamEvent>>,
}

impl RecordingEventSink {
    pub fn events(&self) -> Vec<TeamEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl TeamEventSink for RecordingEventSink {
    fn emit(&self, event: &TeamEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

/// Every call fails as if the database were unreachable
pub struct FailingTeamRepository;

fn unreachable_store() -> StoreError {
    StoreError::Backend("connection refused".to_string())
}

#[async_trait]
impl TeamRepository for FailingTeamRepository {
    async fn insert(&self, _candidate: &NewTeam) -> Result<Team, StoreError> {
        Err(unreachable_store())
    }

    async fn find_all(&self) -> Result<Vec<Team>, StoreError> {
        Err(unreachable_store())
    }

    async fn find_by_name(&self, _name: &str) -> Result<Option<Team>, StoreError> {
        Err(unreachable_store())
    }

    async fn update_by_name(
        &self,
        _name: &str,
        _replacement: &NewTeam,
    ) -> Result<Option<Team>, StoreError> {
        Err(unreachable_store())
    }

    async fn delete_by_name(&self, _name: &str) -> Result<Option<Team>, StoreError> {
        Err(unreachable_store())
    }
}

/// Lookups never see existing records, so every uniqueness fast path
/// passes and only the store constraint can reject a duplicate
#[derive(Default)]
pub struct BlindTeamRepository {
    inner: InMemoryTeamRepository,
}

impl BlindTeamRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TeamRepository for BlindTeamRepository {
    async fn insert(&self, candidate: &NewTeam) -> Result<Team, StoreError> {
        self.inner.insert(candidate).await
    }

    async fn find_all(&self) -> Result<Vec<Team>, StoreError> {
        self.inner.find_all().await
    }

    async fn find_by_name(&self, _name: &str) -> Result<Option<Team>, StoreError> {
        Ok(None)
    }

    async fn update_by_name(
        &self,
        name: &str,
        replacement: &NewTeam,
    ) -> Result<Option<Team>, StoreError> {
        self.inner.update_by_name(name, replacement).await
    }

    async fn delete_by_name(&self, name: &str) -> Result<Option<Team>, StoreError> {
        self.inner.delete_by_name(name).await
    }
}
