use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use super::users::UserResponse;
use crate::api::errors::ApiError;
use crate::api::SharedRegistry;
use crate::domain::team::{Counter, Team, TeamId};

/// Request body for creating a team
#[derive(Debug, Deserialize)]
pub struct CreateTeamRequest {
    pub name: String,
}

/// Team representation returned by the API
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: String,
    pub name: String,
    pub users: Vec<UserResponse>,
    pub counter: Counter,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id().to_string(),
            name: team.name().to_string(),
            users: team.users().iter().map(UserResponse::from).collect(),
            counter: team.counter(),
        }
    }
}

/// Create a new team
///
/// POST /teams
pub async fn create_team(
    State(registry): State<SharedRegistry>,
    payload: Result<Json<CreateTeamRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    let Json(req) = payload?;

    let team = registry.create_team(&req.name)?;
    tracing::info!(team_id = %team.id(), name = %team.name(), "Team created");

    Ok((StatusCode::CREATED, Json(TeamResponse::from(&team))))
}

/// List all teams
///
/// GET /teams
pub async fn get_teams(State(registry): State<SharedRegistry>) -> Json<Vec<TeamResponse>> {
    let teams = registry.get_teams();

    Json(teams.iter().map(TeamResponse::from).collect())
}

/// Get a team by ID
///
/// GET /teams/:team_id
pub async fn get_team(
    State(registry): State<SharedRegistry>,
    Path(team_id): Path<String>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = registry.get_team(&TeamId::from(team_id))?;

    Ok(Json(TeamResponse::from(&team)))
}

/// Get the aggregate step count of a team
///
/// GET /teams/:team_id/counters
///
/// The body is the bare total, e.g. `42`.
pub async fn get_counter(
    State(registry): State<SharedRegistry>,
    Path(team_id): Path<String>,
) -> Result<Json<i64>, ApiError> {
    let count = registry.get_counter(&TeamId::from(team_id))?;

    Ok(Json(count))
}
