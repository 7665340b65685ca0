use thiserror::Error;

use crate::domain::team::value_objects::TeamId;
use crate::domain::user::value_objects::UserId;

/// Semantic classification of a registry failure
///
/// Callers that only care about the category of a failure can match on this
/// instead of the full error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A referenced team or user does not exist
    NotFound,
    /// A team name or a user name within a team is already taken
    DuplicateName,
    /// A requested counter change cannot be represented
    InvalidValue,
}

/// Errors returned by registry operations
///
/// A failed operation never leaves a partial mutation behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Team not found: {0}")]
    TeamNotFound(TeamId),

    #[error("User {user_id} not found in team {team_id}")]
    UserNotFound { team_id: TeamId, user_id: UserId },

    #[error("Team name already exists: {0}")]
    DuplicateTeamName(String),

    #[error("User name {name} already exists in team {team_id}")]
    DuplicateUserName { team_id: TeamId, name: String },

    #[error("Adding {steps} steps to user {user_id} in team {team_id} overflows the counter")]
    CounterOverflow {
        team_id: TeamId,
        user_id: UserId,
        steps: i64,
    },
}

impl RegistryError {
    /// Returns the semantic kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistryError::TeamNotFound(_) | RegistryError::UserNotFound { .. } => {
                ErrorKind::NotFound
            }
            RegistryError::DuplicateTeamName(_) | RegistryError::DuplicateUserName { .. } => {
                ErrorKind::DuplicateName
            }
            RegistryError::CounterOverflow { .. } => ErrorKind::InvalidValue,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    pub fn is_duplicate_name(&self) -> bool {
        self.kind() == ErrorKind::DuplicateName
    }
}

pub type RegistryResult<T> = Result<T, RegistryError>;
