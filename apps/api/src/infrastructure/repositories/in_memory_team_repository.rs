use std::collections::HashMap;

use parking_lot::Mutex;

use crate::domain::errors::{RegistryError, RegistryResult};
use crate::domain::repositories::{NewUser, TeamRepository};
use crate::domain::team::{Team, TeamId};
use crate::domain::user::{User, UserId};

/// In-memory implementation of TeamRepository
///
/// All teams live in one map guarded by a single exclusive lock. Every
/// operation, read or write, holds the lock for its whole duration, so all
/// operations are totally ordered and no caller can observe a half-applied
/// mutation. Data is lost when the process terminates.
#[derive(Debug, Default)]
pub struct InMemoryTeamRepository {
    teams: Mutex<HashMap<TeamId, Team>>,
}

impl InMemoryTeamRepository {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    fn team_mut<'a>(
        teams: &'a mut HashMap<TeamId, Team>,
        team_id: &TeamId,
    ) -> RegistryResult<&'a mut Team> {
        teams
            .get_mut(team_id)
            .ok_or_else(|| RegistryError::TeamNotFound(team_id.clone()))
    }
}

impl TeamRepository for InMemoryTeamRepository {
    fn create_team(&self, name: &str) -> RegistryResult<Team> {
        let mut teams = self.teams.lock();

        if teams.values().any(|t| t.name() == name) {
            return Err(RegistryError::DuplicateTeamName(name.to_string()));
        }

        let mut id = TeamId::generate();
        while teams.contains_key(&id) {
            id = TeamId::generate();
        }

        let team = Team::new(id.clone(), name);
        teams.insert(id, team.clone());
        Ok(team)
    }

    fn get_teams(&self) -> Vec<Team> {
        self.teams.lock().values().cloned().collect()
    }

    fn get_team(&self, team_id: &TeamId) -> RegistryResult<Team> {
        self.teams
            .lock()
            .get(team_id)
            .cloned()
            .ok_or_else(|| RegistryError::TeamNotFound(team_id.clone()))
    }

    fn add_user(&self, team_id: &TeamId, user: NewUser) -> RegistryResult<Vec<User>> {
        let mut teams = self.teams.lock();
        let team = Self::team_mut(&mut teams, team_id)?;

        let users = team.add_user(user.name, user.counter)?;
        Ok(users.to_vec())
    }

    fn get_users(&self, team_id: &TeamId) -> RegistryResult<Vec<User>> {
        self.teams
            .lock()
            .get(team_id)
            .map(|t| t.users().to_vec())
            .ok_or_else(|| RegistryError::TeamNotFound(team_id.clone()))
    }

    fn get_user(&self, team_id: &TeamId, user_id: &UserId) -> RegistryResult<User> {
        let teams = self.teams.lock();
        let team = teams
            .get(team_id)
            .ok_or_else(|| RegistryError::TeamNotFound(team_id.clone()))?;

        team.user(user_id)
            .cloned()
            .ok_or_else(|| RegistryError::UserNotFound {
                team_id: team_id.clone(),
                user_id: user_id.clone(),
            })
    }

    fn increment_counter(&self, team_id: &TeamId, user_id: &UserId) -> RegistryResult<()> {
        self.increment_counter_by_value(team_id, user_id, 1)
    }

    fn increment_counter_by_value(
        &self,
        team_id: &TeamId,
        user_id: &UserId,
        value: i64,
    ) -> RegistryResult<()> {
        let mut teams = self.teams.lock();
        let team = Self::team_mut(&mut teams, team_id)?;

        team.add_steps(user_id, value)
    }

    fn get_counter(&self, team_id: &TeamId) -> RegistryResult<i64> {
        self.teams
            .lock()
            .get(team_id)
            .map(|t| t.counter().count)
            .ok_or_else(|| RegistryError::TeamNotFound(team_id.clone()))
    }
}
