use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque team identifier
///
/// # Invariants
/// - Never empty when generated
/// - Unique across the registry (enforced by the registry at insertion)
///
/// Identifiers received from callers are accepted as-is; an identifier that
/// was never generated simply fails lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(String);

impl TeamId {
    /// Generates a fresh random identifier
    ///
    /// # Example
    /// ```
    /// use steps_leaderboard_api::domain::team::value_objects::TeamId;
    ///
    /// let id = TeamId::generate();
    /// assert!(!id.as_str().is_empty());
    /// ```
    pub fn generate() -> Self {
        TeamId(Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TeamId {
    fn from(id: String) -> Self {
        TeamId(id)
    }
}

impl From<&str> for TeamId {
    fn from(id: &str) -> Self {
        TeamId(id.to_string())
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Aggregate step count of a team
///
/// Always derived from the team's users, never stored independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    pub count: i64,
}

impl Counter {
    /// Sums a sequence of step counts
    ///
    /// The sum is exact whenever it fits in an `i64`, regardless of order;
    /// only a total outside that range is clamped to the nearest bound.
    pub fn sum(counts: impl IntoIterator<Item = i64>) -> Self {
        let total: i128 = counts.into_iter().map(i128::from).sum();
        let count = total.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64;
        Counter { count }
    }
}
