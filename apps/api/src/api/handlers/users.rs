use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::SharedRegistry;
use crate::domain::repositories::NewUser;
use crate::domain::team::TeamId;
use crate::domain::user::{User, UserId};

/// Request body for adding a user to a team
#[derive(Debug, Deserialize)]
pub struct AddUserRequest {
    pub name: String,
    /// Initial step count, zero when omitted
    #[serde(default)]
    pub counter: i64,
}

/// User representation returned by the API
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub counter: i64,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            name: user.name().to_string(),
            counter: user.counter(),
        }
    }
}

/// Request body for incrementing a counter by an arbitrary value
#[derive(Debug, Deserialize)]
pub struct IncrementRequest {
    #[serde(rename = "incrementValue")]
    pub increment_value: i64,
}

/// Response from a successful increment by value
#[derive(Debug, Serialize)]
pub struct IncrementResponse {
    pub counter: i64,
}

/// Response from a successful increment by one
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

fn to_responses(users: &[User]) -> Vec<UserResponse> {
    users.iter().map(UserResponse::from).collect()
}

/// Add a user to a team
///
/// POST /teams/:team_id/users
///
/// Responds with the team's full user list.
pub async fn add_user(
    State(registry): State<SharedRegistry>,
    Path(team_id): Path<String>,
    payload: Result<Json<AddUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Vec<UserResponse>>), ApiError> {
    let Json(req) = payload?;
    let team_id = TeamId::from(team_id);

    let users = registry.add_user(
        &team_id,
        NewUser {
            name: req.name,
            counter: req.counter,
        },
    )?;
    tracing::info!(team_id = %team_id, users = users.len(), "User added");

    Ok((StatusCode::CREATED, Json(to_responses(&users))))
}

/// List the users of a team
///
/// GET /teams/:team_id/users
pub async fn get_users(
    State(registry): State<SharedRegistry>,
    Path(team_id): Path<String>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = registry.get_users(&TeamId::from(team_id))?;

    Ok(Json(to_responses(&users)))
}

/// Get a single user of a team
///
/// GET /teams/:team_id/users/:user_id
pub async fn get_user(
    State(registry): State<SharedRegistry>,
    Path((team_id, user_id)): Path<(String, String)>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = registry.get_user(&TeamId::from(team_id), &UserId::from(user_id))?;

    Ok(Json(UserResponse::from(&user)))
}

/// Add one step to a user
///
/// POST /teams/:team_id/users/:user_id/counters
pub async fn increment_counter(
    State(registry): State<SharedRegistry>,
    Path((team_id, user_id)): Path<(String, String)>,
) -> Result<Json<MessageResponse>, ApiError> {
    let team_id = TeamId::from(team_id);
    let user_id = UserId::from(user_id);

    registry.increment_counter(&team_id, &user_id)?;
    tracing::debug!(team_id = %team_id, user_id = %user_id, "Counter incremented");

    Ok(Json(MessageResponse {
        message: "Steps incremented successfully by 1".to_string(),
    }))
}

/// Add an arbitrary number of steps to a user
///
/// POST /teams/:team_id/users/:user_id/counters/increment
pub async fn increment_counter_by_value(
    State(registry): State<SharedRegistry>,
    Path((team_id, user_id)): Path<(String, String)>,
    payload: Result<Json<IncrementRequest>, JsonRejection>,
) -> Result<Json<IncrementResponse>, ApiError> {
    let Json(req) = payload?;
    let team_id = TeamId::from(team_id);
    let user_id = UserId::from(user_id);

    registry.increment_counter_by_value(&team_id, &user_id, req.increment_value)?;
    tracing::debug!(
        team_id = %team_id,
        user_id = %user_id,
        value = req.increment_value,
        "Counter incremented by value"
    );

    Ok(Json(IncrementResponse {
        counter: req.increment_value,
    }))
}
