use crate::error::{Result, TaskError};
use crate::index::{index_tasks, DisplayTask, TaskIndex};
use crate::model::{seed_tasks, Task};

pub(crate) const INVALID_TASK_NUMBER: &str = "invalid task number";

/// The ordered, in-memory list of tasks for a session.
///
/// Insertion order is display order. The list only grows through [`push`](Self::push)
/// and only shrinks through [`remove`](Self::remove).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        Self::from(seed_tasks())
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get_mut(&mut self, index: TaskIndex) -> Option<&mut Task> {
        self.tasks.get_mut(index.offset())
    }

    pub fn last_index(&self) -> Option<TaskIndex> {
        TaskIndex::new(self.tasks.len())
    }

    pub fn push(&mut self, task: Task) -> TaskIndex {
        self.tasks.push(task);
        TaskIndex::from_offset(self.tasks.len() - 1)
    }

    /// Removes the task at `index`, shifting later tasks down by one.
    pub fn remove(&mut self, index: TaskIndex) -> Result<Task> {
        if index.get() > self.tasks.len() {
            return Err(TaskError::validation(INVALID_TASK_NUMBER));
        }
        Ok(self.tasks.remove(index.offset()))
    }

    /// Turns raw user input into a position that exists in this list.
    ///
    /// Non-numeric input, zero, negatives and out-of-range numbers all fail
    /// the same way.
    pub fn resolve(&self, raw: &str) -> Result<TaskIndex> {
        raw.parse::<TaskIndex>()
            .ok()
            .filter(|idx| idx.get() <= self.tasks.len())
            .ok_or_else(|| TaskError::validation(INVALID_TASK_NUMBER))
    }

    /// Indexed view of the list, recomputed on every call.
    pub fn entries(&self) -> impl Iterator<Item = DisplayTask> + '_ {
        index_tasks(&self.tasks)
    }

    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}
