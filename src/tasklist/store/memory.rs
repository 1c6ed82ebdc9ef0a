use super::TaskRepository;
use crate::error::{Result, TaskError};
use crate::task_list::TaskList;

/// In-memory storage for testing.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    saved: Option<TaskList>,
    backup: Option<TaskList>,
    fail_load: bool,
    fail_save: bool,
    save_count: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `tasks`, as if a previous session saved them.
    pub fn with_saved(tasks: TaskList) -> Self {
        Self {
            saved: Some(tasks),
            ..Self::default()
        }
    }

    /// Make every `load` fail as if the file were corrupt.
    pub fn failing_load(mut self) -> Self {
        self.fail_load = true;
        self
    }

    /// Make every `save` fail as if the file were read-only.
    pub fn failing_save(mut self) -> Self {
        self.fail_save = true;
        self
    }

    pub fn saved(&self) -> Option<&TaskList> {
        self.saved.as_ref()
    }

    pub fn save_count(&self) -> usize {
        self.save_count
    }

    pub fn backup(&self) -> Option<&TaskList> {
        self.backup.as_ref()
    }
}

impl TaskRepository for InMemoryStore {
    fn load(&self) -> Result<TaskList> {
        if self.fail_load {
            return Err(TaskError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "simulated load failure",
            )));
        }
        Ok(self.saved.clone().unwrap_or_else(TaskList::seeded))
    }

    fn save(&mut self, tasks: &TaskList) -> Result<()> {
        if self.fail_save {
            return Err(TaskError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "simulated save failure",
            )));
        }
        self.saved = Some(tasks.clone());
        self.save_count += 1;
        Ok(())
    }

    fn back_up(&mut self) -> Result<()> {
        self.backup = self.saved.clone();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::Task;
    use crate::task_list::TaskList;

    /// Builds a list from `(description, done)` pairs.
    pub fn list_of(items: &[(&str, bool)]) -> TaskList {
        TaskList::from(
            items
                .iter()
                .map(|(description, done)| Task::new(*description).with_done(*done))
                .collect::<Vec<_>>(),
        )
    }

    /// Builds `count` open tasks named "Task 1", "Task 2", ...
    pub fn numbered(count: usize) -> TaskList {
        TaskList::from(
            (1..=count)
                .map(|i| Task::new(format!("Task {}", i)))
                .collect::<Vec<_>>(),
        )
    }
}
