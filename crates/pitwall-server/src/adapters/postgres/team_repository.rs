//! PostgreSQL implementation of TeamRepository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use pitwall::{NewTeam, StoreError, Team, TeamRepository};

/// PostgreSQL implementation of TeamRepository
pub struct PgTeamRepository {
    pool: PgPool,
}

impl PgTeamRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct TeamRow {
    id: Uuid,
    name: String,
    base: String,
    championships_won: i64,
}

impl From<TeamRow> for Team {
    fn from(row: TeamRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            base: row.base,
            championships_won: row.championships_won,
        }
    }
}

/// Unique violations on `teams.name` become conflicts, everything else a
/// backend failure
fn store_error(err: sqlx::Error) -> StoreError {
    match err.as_database_error() {
        Some(db) if db.is_unique_violation() => StoreError::Conflict(db.message().to_string()),
        _ => StoreError::Backend(err.to_string()),
    }
}

#[async_trait]
impl TeamRepository for PgTeamRepository {
    async fn insert(&self, candidate: &NewTeam) -> Result<Team, StoreError> {
        let row = sqlx::query_as::<_, TeamRow>(
            r#"
            INSERT INTO teams (id, name, base, championships_won)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, base, championships_won
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&candidate.name)
        .bind(&candidate.base)
        .bind(candidate.championships_won)
        .fetch_one(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(row.into())
    }

    async fn find_all(&self) -> Result<Vec<Team>, StoreError> {
        let rows = sqlx::query_as::<_, TeamRow>(
            "SELECT id, name, base, championships_won FROM teams ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Team>, StoreError> {
        let row = sqlx::query_as::<_, TeamRow>(
            "SELECT id, name, base, championships_won FROM teams WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(row.map(Into::into))
    }

    async fn update_by_name(
        &self,
        name: &str,
        replacement: &NewTeam,
    ) -> Result<Option<Team>, StoreError> {
        let row = sqlx::query_as::<_, TeamRow>(
            r#"
            UPDATE teams
            SET name = $2, base = $3, championships_won = $4
            WHERE name = $1
            RETURNING id, name, base, championships_won
            "#,
        )
        .bind(name)
        .bind(&replacement.name)
        .bind(&replacement.base)
        .bind(replacement.championships_won)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(row.map(Into::into))
    }

    async fn delete_by_name(&self, name: &str) -> Result<Option<Team>, StoreError> {
        let row = sqlx::query_as::<_, TeamRow>(
            r#"
            DELETE FROM teams
            WHERE name = $1
            RETURNING id, name, base, championships_won
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(row.map(Into::into))
    }
}
