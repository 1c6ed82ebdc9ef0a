use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    // On-disk key is `task`.
    #[serde(rename = "task")]
    pub description: String,
    #[serde(default)]
    pub done: bool,
}

impl Task {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            done: false,
        }
    }

    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }
}

/// The tasks a fresh installation starts with when no task file exists yet.
pub fn seed_tasks() -> Vec<Task> {
    vec![
        Task::new("Do projects"),
        Task::new("watch sunset").with_done(true),
        Task::new("Read a book"),
        Task::new("Go for a run"),
    ]
}
