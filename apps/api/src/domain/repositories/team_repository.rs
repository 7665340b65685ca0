use crate::domain::errors::RegistryResult;
use crate::domain::team::{Team, TeamId};
use crate::domain::user::{User, UserId};

/// Data for a user about to be added to a team
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub counter: i64,
}

impl NewUser {
    /// A new user starting at zero steps
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            counter: 0,
        }
    }
}

/// Repository trait for the team registry
///
/// Defines the operations the transport layer may invoke. Every operation is
/// atomic with respect to every other: implementations must ensure that the
/// uniqueness checks and the mutation happen in one critical section, and that
/// a failed call leaves the registry unchanged.
///
/// Returned values are owned copies; mutating them never affects the registry.
pub trait TeamRepository: Send + Sync {
    /// Create a team with a fresh identifier
    ///
    /// Fails with `DuplicateTeamName` if a team with the same name exists.
    fn create_team(&self, name: &str) -> RegistryResult<Team>;

    /// List all teams in unspecified order
    fn get_teams(&self) -> Vec<Team>;

    /// Find a team by its ID
    fn get_team(&self, team_id: &TeamId) -> RegistryResult<Team>;

    /// Add a user to a team and return the team's full user sequence
    fn add_user(&self, team_id: &TeamId, user: NewUser) -> RegistryResult<Vec<User>>;

    /// List a team's users in insertion order
    fn get_users(&self, team_id: &TeamId) -> RegistryResult<Vec<User>>;

    /// Find a single user of a team
    fn get_user(&self, team_id: &TeamId, user_id: &UserId) -> RegistryResult<User>;

    /// Add exactly one step to a user and to the team total
    fn increment_counter(&self, team_id: &TeamId, user_id: &UserId) -> RegistryResult<()>;

    /// Add `value` steps (any sign) to a user and to the team total
    fn increment_counter_by_value(
        &self,
        team_id: &TeamId,
        user_id: &UserId,
        value: i64,
    ) -> RegistryResult<()>;

    /// Sum of the team's user counters
    fn get_counter(&self, team_id: &TeamId) -> RegistryResult<i64>;
}
