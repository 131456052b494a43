use anyhow::Context;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use pitwall::{TeamEventSink, TeamRepository};

mod adapters;
mod application;
mod config;
mod models;
mod routes;
#[cfg(test)]
mod test_support;

use adapters::{InMemoryTeamRepository, PgTeamRepository, TracingEventSink};
use application::TeamService;
use config::{ServerConfig, StoreBackend};

/// Team service over whichever repository the configuration selects
pub type AppTeamService = TeamService<dyn TeamRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub team_service: Arc<AppTeamService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
    validation_mode: String,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Pitwall API is running - teams on the grid".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        validation_mode: state.team_service.mode().to_string(),
    })
}

/// Build the full router: docs, health check and Team routes
pub fn build_router(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::teams::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🏁 Pitwall API initializing...");

    let config = ServerConfig::from_lookup(|key| secrets.get(key))?;
    tracing::info!(
        "⚙️  Store: {}, validation mode: {}",
        config.store,
        config.validation_mode
    );

    let repo: Arc<dyn TeamRepository> = match config.store {
        StoreBackend::Postgres => {
            sqlx::migrate!()
                .run(&pool)
                .await
                .context("Failed to run database migrations")?;
            tracing::info!("✅ Database migrations completed");

            Arc::new(PgTeamRepository::new(pool))
        }
        StoreBackend::Memory => {
            tracing::warn!("⚠️  In-memory store selected - teams are lost on restart");
            Arc::new(InMemoryTeamRepository::new())
        }
    };

    let events: Arc<dyn TeamEventSink> = Arc::new(TracingEventSink);
    let team_service = Arc::new(TeamService::new(repo, events, config.validation_mode));

    let router = build_router(AppState { team_service });

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Pitwall API ready");

    Ok(router.into())
}
