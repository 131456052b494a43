//! Team Routes - Record Management
//!
//! HTTP handlers that delegate to TeamService for business logic.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use pitwall::{TeamError, TeamPayload};

use crate::models::{ErrorResponse, TeamRequest, TeamResponse};
use crate::AppState;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Map a domain error onto its status code and error body
fn api_error(err: TeamError) -> ApiError {
    let status = match &err {
        rejected if rejected.is_client_error() => StatusCode::BAD_REQUEST,
        TeamError::NotFound => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(ErrorResponse {
            status: status.as_u16(),
            error: err.to_string(),
        }),
    )
}

/// An unreadable body is treated as an empty one, so the service rejects it
/// as missing parameters
fn into_payload(body: Result<Json<TeamRequest>, JsonRejection>) -> TeamPayload {
    match body {
        Ok(Json(request)) => request.into(),
        Err(rejection) => {
            tracing::debug!("Unreadable team body: {}", rejection);
            TeamPayload::default()
        }
    }
}

/// List all Teams
#[utoipa::path(
    get,
    path = "/teams",
    responses(
        (status = 200, description = "List of all Teams", body = Vec<TeamResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Team"
)]
pub async fn list_teams(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    let teams = state.team_service.find_all().await.map_err(api_error)?;

    Ok(Json(teams.into_iter().map(TeamResponse::from).collect()))
}

/// Create new Team
#[utoipa::path(
    post,
    path = "/teams",
    request_body = TeamRequest,
    responses(
        (status = 201, description = "Team created", body = TeamResponse),
        (status = 400, description = "Invalid or duplicate Team", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Team"
)]
pub async fn create_team(
    State(state): State<AppState>,
    body: Result<Json<TeamRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    let team = state
        .team_service
        .create(into_payload(body))
        .await
        .map_err(api_error)?;

    Ok((StatusCode::CREATED, Json(team.into())))
}

/// Get Team by name
#[utoipa::path(
    get,
    path = "/teams/{name}",
    params(("name" = String, Path, description = "Team name")),
    responses(
        (status = 200, description = "Team found", body = TeamResponse),
        (status = 400, description = "Malformed name", body = ErrorResponse),
        (status = 404, description = "Team not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Team"
)]
pub async fn get_team(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = state
        .team_service
        .find_one(&name)
        .await
        .map_err(api_error)?;

    Ok(Json(team.into()))
}

/// Replace Team
#[utoipa::path(
    put,
    path = "/teams/{name}",
    params(("name" = String, Path, description = "Team name")),
    request_body = TeamRequest,
    responses(
        (status = 200, description = "Team updated", body = TeamResponse),
        (status = 400, description = "Invalid or duplicate Team", body = ErrorResponse),
        (status = 404, description = "Team not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Team"
)]
pub async fn update_team(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Result<Json<TeamRequest>, JsonRejection>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = state
        .team_service
        .update(&name, into_payload(body))
        .await
        .map_err(api_error)?;

    Ok(Json(team.into()))
}

/// Delete Team
#[utoipa::path(
    delete,
    path = "/teams/{name}",
    params(("name" = String, Path, description = "Team name")),
    responses(
        (status = 200, description = "Team deleted", body = TeamResponse),
        (status = 400, description = "Malformed name", body = ErrorResponse),
        (status = 404, description = "Team not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Team"
)]
pub async fn delete_team(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = state
        .team_service
        .delete(&name)
        .await
        .map_err(api_error)?;

    Ok(Json(team.into()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/teams", get(list_teams).post(create_team))
        .route(
            "/teams/:name",
            get(get_team).put(update_team).delete(delete_team),
        )
}
