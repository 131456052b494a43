//! Team Application Service (Use Case)
//!
//! Enforces every Team rule before touching the store and classifies each
//! outcome into a single [`TeamError`] variant. One event is emitted per
//! operation, after the outcome is known.

use std::sync::Arc;

use pitwall::{
    validate_key, validate_team, Team, TeamError, TeamEvent, TeamEventSink, TeamOperation,
    TeamPayload, TeamRepository, ValidationMode,
};

/// Application service for Team operations
pub struct TeamService<R: TeamRepository + ?Sized> {
    repo: Arc<R>,
    events: Arc<dyn TeamEventSink>,
    mode: ValidationMode,
}

impl<R: TeamRepository + ?Sized> TeamService<R> {
    pub fn new(repo: Arc<R>, events: Arc<dyn TeamEventSink>, mode: ValidationMode) -> Self {
        Self { repo, events, mode }
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Create a new Team
    pub async fn create(&self, payload: TeamPayload) -> Result<Team, TeamError> {
        let result = self.try_create(&payload).await;
        let key = match &result {
            Ok(team) => Some(team.name.as_str()),
            Err(_) => payload.name_str(),
        };
        self.report(TeamOperation::Create, key, &result);
        result
    }

    /// Get all Teams
    pub async fn find_all(&self) -> Result<Vec<Team>, TeamError> {
        let result = self.repo.find_all().await.map_err(TeamError::from);
        self.report(TeamOperation::FindAll, None, &result);
        result
    }

    /// Get a Team by name
    pub async fn find_one(&self, name: &str) -> Result<Team, TeamError> {
        let result = self.try_find_one(name).await;
        self.report(TeamOperation::FindOne, Some(name), &result);
        result
    }

    /// Replace the Team keyed by `name` with the payload
    pub async fn update(&self, name: &str, payload: TeamPayload) -> Result<Team, TeamError> {
        let result = self.try_update(name, &payload).await;
        self.report(TeamOperation::Update, Some(name), &result);
        result
    }

    /// Delete the Team keyed by `name`, returning it
    pub async fn delete(&self, name: &str) -> Result<Team, TeamError> {
        let result = self.try_delete(name).await;
        self.report(TeamOperation::Delete, Some(name), &result);
        result
    }

    async fn try_create(&self, payload: &TeamPayload) -> Result<Team, TeamError> {
        let candidate = validate_team(payload, self.mode)?;

        // Fast path only; the store's unique constraint decides races
        self.ensure_name_free(&candidate.name).await?;

        Ok(self.repo.insert(&candidate).await?)
    }

    async fn try_find_one(&self, name: &str) -> Result<Team, TeamError> {
        validate_key(name)?;

        self.repo
            .find_by_name(name)
            .await?
            .ok_or(TeamError::NotFound)
    }

    async fn try_update(&self, name: &str, payload: &TeamPayload) -> Result<Team, TeamError> {
        if name.is_empty() {
            return Err(TeamError::MissingParameters);
        }
        let candidate = validate_team(payload, self.mode)?;

        // Legacy mode also treats the record being updated as a conflict
        if candidate.name != name || self.mode == ValidationMode::Legacy {
            self.ensure_name_free(&candidate.name).await?;
        }

        self.repo
            .update_by_name(name, &candidate)
            .await?
            .ok_or(TeamError::NotFound)
    }

    async fn try_delete(&self, name: &str) -> Result<Team, TeamError> {
        validate_key(name)?;

        if self.repo.find_by_name(name).await?.is_none() {
            return Err(TeamError::NotFound);
        }

        // Absent here means a concurrent delete won
        self.repo
            .delete_by_name(name)
            .await?
            .ok_or(TeamError::NotFound)
    }

    async fn ensure_name_free(&self, name: &str) -> Result<(), TeamError> {
        match self.repo.find_by_name(name).await? {
            Some(_) => Err(TeamError::DuplicateTeam),
            None => Ok(()),
        }
    }

    fn report<T>(&self, operation: TeamOperation, key: Option<&str>, result: &Result<T, TeamError>) {
        self.events.emit(&TeamEvent::new(operation, key, result));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryTeamRepository;
    use crate::test_support::{BlindTeamRepository, FailingTeamRepository, RecordingEventSink};
    use pitwall::{NoopEventSink, TeamOutcome};
    use serde_json::json;

    fn service(mode: ValidationMode) -> TeamService<InMemoryTeamRepository> {
        TeamService::new(
            Arc::new(InMemoryTeamRepository::new()),
            Arc::new(NoopEventSink),
            mode,
        )
    }

    fn payload(value: serde_json::Value) -> TeamPayload {
        serde_json::from_value(value).unwrap()
    }

    fn ferrari() -> TeamPayload {
        TeamPayload::new("Ferrari", "Maranello", 16)
    }

    #[tokio::test]
    async fn test_create_then_find_one() {
        let service = service(ValidationMode::Strict);

        let created = service.create(ferrari()).await.unwrap();
        assert_eq!(created.name, "Ferrari");
        assert_eq!(created.base, "Maranello");
        assert_eq!(created.championships_won, 16);

        let found = service.find_one("Ferrari").await.unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_create_twice_is_duplicate() {
        let service = service(ValidationMode::Strict);

        service.create(ferrari()).await.unwrap();
        let second = service.create(ferrari()).await;

        assert_eq!(second, Err(TeamError::DuplicateTeam));
        assert_eq!(service.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_payload_without_store_write() {
        let service = service(ValidationMode::Strict);

        let result = service
            .create(payload(json!({"name": "Ferrari", "base": "Ferrari", "championshipsWon": 1})))
            .await;

        assert_eq!(result, Err(TeamError::NameEqualsBase));
        assert!(service.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_zero_championships_depends_on_mode() {
        let body = json!({"name": "Williams", "base": "Grove", "championshipsWon": 0});

        let strict = service(ValidationMode::Strict);
        assert_eq!(
            strict.create(payload(body.clone())).await.unwrap().championships_won,
            0
        );

        let legacy = service(ValidationMode::Legacy);
        assert_eq!(
            legacy.create(payload(body)).await,
            Err(TeamError::MissingParameters)
        );
    }

    #[tokio::test]
    async fn test_store_constraint_is_authoritative_on_insert() {
        // The fast-path lookup never sees the existing record, as in a race
        let repo = Arc::new(BlindTeamRepository::new());
        let service = TeamService::new(repo, Arc::new(NoopEventSink), ValidationMode::Strict);

        service.create(ferrari()).await.unwrap();
        let raced = service.create(ferrari()).await;

        assert_eq!(raced, Err(TeamError::DuplicateTeam));
    }

    #[tokio::test]
    async fn test_store_constraint_is_authoritative_on_rename() {
        let repo = Arc::new(BlindTeamRepository::new());
        let service = TeamService::new(repo, Arc::new(NoopEventSink), ValidationMode::Strict);
        service.create(ferrari()).await.unwrap();
        service
            .create(TeamPayload::new("McLaren", "Woking", 8))
            .await
            .unwrap();

        let raced = service
            .update("Ferrari", TeamPayload::new("McLaren", "Maranello", 16))
            .await;

        assert_eq!(raced, Err(TeamError::DuplicateTeam));
        assert_eq!(service.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_find_all_in_insertion_order() {
        let service = service(ValidationMode::Strict);
        service.create(ferrari()).await.unwrap();
        service
            .create(TeamPayload::new("McLaren", "Woking", 8))
            .await
            .unwrap();

        let names: Vec<String> = service
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["Ferrari", "McLaren"]);
    }

    #[tokio::test]
    async fn test_find_one_validates_key() {
        let service = service(ValidationMode::Strict);

        assert_eq!(service.find_one("").await, Err(TeamError::MissingParameters));
        assert_eq!(service.find_one("Fe").await, Err(TeamError::InvalidNameLength));
        assert_eq!(service.find_one("Ferrari").await, Err(TeamError::NotFound));
    }

    #[tokio::test]
    async fn test_update_unchanged_name_strict_succeeds() {
        let service = service(ValidationMode::Strict);
        let created = service.create(ferrari()).await.unwrap();

        let updated = service
            .update("Ferrari", TeamPayload::new("Ferrari", "Maranello", 17))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.championships_won, 17);
        assert_eq!(service.find_one("Ferrari").await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_unchanged_name_legacy_conflicts() {
        let service = service(ValidationMode::Legacy);
        service.create(ferrari()).await.unwrap();

        let result = service
            .update("Ferrari", TeamPayload::new("Ferrari", "Maranello", 17))
            .await;

        assert_eq!(result, Err(TeamError::DuplicateTeam));
        assert_eq!(
            service.find_one("Ferrari").await.unwrap().championships_won,
            16
        );
    }

    #[tokio::test]
    async fn test_update_rename() {
        let service = service(ValidationMode::Legacy);
        service.create(ferrari()).await.unwrap();

        let renamed = service
            .update("Ferrari", TeamPayload::new("Scuderia", "Maranello", 16))
            .await
            .unwrap();

        assert_eq!(renamed.name, "Scuderia");
        assert_eq!(service.find_one("Ferrari").await, Err(TeamError::NotFound));
        assert_eq!(service.find_one("Scuderia").await.unwrap(), renamed);
    }

    #[tokio::test]
    async fn test_update_rename_onto_existing_conflicts() {
        let service = service(ValidationMode::Strict);
        service.create(ferrari()).await.unwrap();
        service
            .create(TeamPayload::new("McLaren", "Woking", 8))
            .await
            .unwrap();

        let result = service
            .update("Ferrari", TeamPayload::new("McLaren", "Maranello", 16))
            .await;

        assert_eq!(result, Err(TeamError::DuplicateTeam));
    }

    #[tokio::test]
    async fn test_update_missing_team() {
        let service = service(ValidationMode::Strict);

        let result = service
            .update("Ferrari", TeamPayload::new("Ferrari", "Maranello", 17))
            .await;

        assert_eq!(result, Err(TeamError::NotFound));
    }

    #[tokio::test]
    async fn test_update_validates_before_lookup() {
        let service = service(ValidationMode::Strict);

        assert_eq!(
            service.update("", ferrari()).await,
            Err(TeamError::MissingParameters)
        );
        assert_eq!(
            service
                .update("Ferrari", TeamPayload::new("Ferrari", "Maranello", -1))
                .await,
            Err(TeamError::NegativeChampionships)
        );
    }

    #[tokio::test]
    async fn test_delete_returns_removed_team() {
        let service = service(ValidationMode::Strict);
        let created = service.create(ferrari()).await.unwrap();

        let deleted = service.delete("Ferrari").await.unwrap();

        assert_eq!(deleted, created);
        assert_eq!(service.find_one("Ferrari").await, Err(TeamError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_missing_team() {
        let service = service(ValidationMode::Strict);
        assert_eq!(service.delete("Nope").await, Err(TeamError::NotFound));
        assert_eq!(service.delete("No").await, Err(TeamError::InvalidNameLength));
    }

    #[tokio::test]
    async fn test_store_failures_are_internal_not_not_found() {
        let service = TeamService::new(
            Arc::new(FailingTeamRepository),
            Arc::new(NoopEventSink),
            ValidationMode::Strict,
        );

        assert!(matches!(
            service.create(ferrari()).await,
            Err(TeamError::Internal { .. })
        ));
        assert!(matches!(
            service.find_all().await,
            Err(TeamError::Internal { .. })
        ));
        assert!(matches!(
            service.find_one("Ferrari").await,
            Err(TeamError::Internal { .. })
        ));
        assert!(matches!(
            service.update("Ferrari", ferrari()).await,
            Err(TeamError::Internal { .. })
        ));
        assert!(matches!(
            service.delete("Ferrari").await,
            Err(TeamError::Internal { .. })
        ));
    }

    #[tokio::test]
    async fn test_validation_runs_before_store_access() {
        let service = TeamService::new(
            Arc::new(FailingTeamRepository),
            Arc::new(NoopEventSink),
            ValidationMode::Strict,
        );

        assert_eq!(
            service.create(TeamPayload::default()).await,
            Err(TeamError::MissingParameters)
        );
        assert_eq!(service.find_one("Fe").await, Err(TeamError::InvalidNameLength));
    }

    #[tokio::test]
    async fn test_one_event_per_operation() {
        let sink = Arc::new(RecordingEventSink::default());
        let service = TeamService::new(
            Arc::new(InMemoryTeamRepository::new()),
            sink.clone(),
            ValidationMode::Strict,
        );

        service.create(ferrari()).await.unwrap();
        service.find_all().await.unwrap();
        let _ = service.find_one("Nope").await;
        service
            .update("Ferrari", TeamPayload::new("Ferrari", "Maranello", 17))
            .await
            .unwrap();
        let _ = service
            .create(payload(json!({"name": "Ferrari", "base": "Ferrari", "championshipsWon": 1})))
            .await;
        service.delete("Ferrari").await.unwrap();

        let events = sink.events();
        let lines: Vec<String> = events.iter().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            vec![
                "Ferrari team created",
                "All teams retrieved",
                "GET /teams/:name Nope Team not found",
                "Ferrari team updated",
                "POST /teams Ferrari Name and base must be different",
                "Ferrari team deleted",
            ]
        );
        assert_eq!(events[2].outcome, TeamOutcome::Rejected(TeamError::NotFound));
        assert_eq!(events[1].key, None);
    }

    #[tokio::test]
    async fn test_internal_event_keeps_cause() {
        let sink = Arc::new(RecordingEventSink::default());
        let service = TeamService::new(
            Arc::new(FailingTeamRepository),
            sink.clone(),
            ValidationMode::Strict,
        );

        let _ = service.find_one("Ferrari").await;

        let events = sink.events();
        assert_eq!(events.len(), 1);
        match events[0].error() {
            Some(TeamError::Internal { cause }) => assert!(cause.contains("connection refused")),
            other => panic!("expected internal error, got {:?}", other),
        }
    }
}
