//! Team - HTTP request/response DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use pitwall::{Team, TeamPayload};

/// Create/replace Team request.
///
/// Fields are accepted as any JSON value so that type errors are reported
/// by the service rather than by the extractor.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamRequest {
    #[serde(default)]
    #[schema(value_type = String, example = "Ferrari")]
    pub name: Option<serde_json::Value>,
    #[serde(default)]
    #[schema(value_type = String, example = "Maranello")]
    pub base: Option<serde_json::Value>,
    #[serde(default)]
    #[schema(value_type = i64, example = 16)]
    pub championships_won: Option<serde_json::Value>,
}

impl From<TeamRequest> for TeamPayload {
    fn from(request: TeamRequest) -> Self {
        Self {
            name: request.name,
            base: request.base,
            championships_won: request.championships_won,
        }
    }
}

/// Team response
#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamResponse {
    pub id: Uuid,
    pub name: String,
    pub base: String,
    pub championships_won: i64,
}

impl From<Team> for TeamResponse {
    fn from(team: Team) -> Self {
        Self {
            id: team.id,
            name: team.name,
            base: team.base,
            championships_won: team.championships_won,
        }
    }
}

/// Error body shared by every failing route
#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ErrorResponse {
    /// HTTP status code, repeated in the body
    pub status: u16,
    pub error: String,
}
