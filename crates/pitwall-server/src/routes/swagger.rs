//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{ErrorResponse, TeamRequest, TeamResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Team endpoints
        super::teams::list_teams,
        super::teams::create_team,
        super::teams::get_team,
        super::teams::update_team,
        super::teams::delete_team,
    ),
    info(
        title = "Pitwall API",
        version = "0.1.0",
        description = "Pitwall - Team record service\n\nTeams are addressed by their unique name.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Team", description = "Team - record management keyed by name"),
    ),
    components(
        schemas(
            TeamRequest,
            TeamResponse,
            ErrorResponse,
        )
    ),
)]
pub struct ApiDoc;
