use super::value_objects::UserId;

/// A team member with an individual step counter
///
/// Users are created through their owning team and only change through
/// counter increments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
    counter: i64,
}

impl User {
    /// Creates a user with the given identifier, name and initial step count
    pub fn new(id: UserId, name: impl Into<String>, counter: i64) -> Self {
        Self {
            id,
            name: name.into(),
            counter,
        }
    }

    /// Adds `steps` to the counter and returns the new value
    ///
    /// Negative values are accepted. Returns `None` and leaves the counter
    /// untouched if the result would not fit in an `i64`.
    pub fn add_steps(&mut self, steps: i64) -> Option<i64> {
        self.counter = self.counter.checked_add(steps)?;
        Some(self.counter)
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn counter(&self) -> i64 {
        self.counter
    }
}
