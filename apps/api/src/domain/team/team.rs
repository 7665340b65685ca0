use super::value_objects::{Counter, TeamId};
use crate::domain::errors::{RegistryError, RegistryResult};
use crate::domain::user::{User, UserId};

/// Team aggregate root
///
/// Represents a named group of users competing on step counts.
/// Enforces the rules that only concern a single team; uniqueness of team
/// names across the registry is enforced by the registry itself.
///
/// # Invariants
/// - User identifiers are unique within the team
/// - User names are unique within the team (case-sensitive)
/// - Users keep their insertion order
/// - The team counter is always the sum of the user counters
///
/// # Example
/// ```
/// use steps_leaderboard_api::domain::team::{Team, TeamId};
///
/// let mut team = Team::new(TeamId::generate(), "Team A");
/// let users = team.add_user("User A", 0).expect("unique name");
/// let user_id = users[0].id().clone();
///
/// team.add_steps(&user_id, 5).expect("user exists");
/// assert_eq!(team.counter().count, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: TeamId,
    name: String,
    users: Vec<User>,
}

impl Team {
    /// Creates an empty team
    pub fn new(id: TeamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            users: Vec::new(),
        }
    }

    /// Appends a new user with a freshly generated identifier
    ///
    /// # Returns
    /// * `Ok(&[User])` - The full user sequence after insertion
    /// * `Err(RegistryError::DuplicateUserName)` - If the name is taken in this team
    pub fn add_user(&mut self, name: impl Into<String>, counter: i64) -> RegistryResult<&[User]> {
        let name = name.into();
        if self.users.iter().any(|u| u.name() == name) {
            return Err(RegistryError::DuplicateUserName {
                team_id: self.id.clone(),
                name,
            });
        }

        let mut id = UserId::generate();
        while self.user(&id).is_some() {
            id = UserId::generate();
        }

        self.users.push(User::new(id, name, counter));
        Ok(&self.users)
    }

    /// Adds `steps` to a user's counter and therefore to the team total
    ///
    /// # Returns
    /// * `Err(RegistryError::UserNotFound)` - If the user is not in this team
    /// * `Err(RegistryError::CounterOverflow)` - If the user's counter would leave the `i64` range
    pub fn add_steps(&mut self, user_id: &UserId, steps: i64) -> RegistryResult<()> {
        let team_id = &self.id;
        let user = self
            .users
            .iter_mut()
            .find(|u| u.id() == user_id)
            .ok_or_else(|| RegistryError::UserNotFound {
                team_id: team_id.clone(),
                user_id: user_id.clone(),
            })?;

        user.add_steps(steps)
            .map(|_| ())
            .ok_or_else(|| RegistryError::CounterOverflow {
                team_id: team_id.clone(),
                user_id: user_id.clone(),
                steps,
            })
    }

    /// Looks up a user by identifier
    pub fn user(&self, user_id: &UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id() == user_id)
    }

    // ===== Getters =====

    pub fn id(&self) -> &TeamId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the users in insertion order
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Returns the aggregate counter, recomputed from the users
    pub fn counter(&self) -> Counter {
        Counter::sum(self.users.iter().map(User::counter))
    }
}
