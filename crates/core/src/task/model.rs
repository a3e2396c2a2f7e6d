//! Task model definitions

use serde::{Deserialize, Serialize};

/// A tracked unit of work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned identifier; `None` until the task has been created
    #[serde(default)]
    pub id: Option<u64>,
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create a new, not yet completed task with the given description
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: None,
            description: description.into(),
            completed: false,
        }
    }

    /// Set the completion flag
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}
