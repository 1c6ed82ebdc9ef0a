//! # Task Indexing
//!
//! Tasks have no stable identifier: a task is referred to by its position in
//! the list. Positions shown to the user start at 1, while the list stores
//! tasks 0-based. [`TaskIndex`] is the only place that crosses between the two,
//! so the `- 1` / `+ 1` never leaks into command code.
//!
//! Because position is identity, removing task 2 turns the old task 3 into
//! the new task 2. Listings are always recomputed from the current list for
//! exactly that reason.

use crate::model::Task;
use std::fmt;
use std::str::FromStr;

/// A user-facing, 1-based task position. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskIndex(usize);

impl TaskIndex {
    /// Returns `None` for 0, which is not a valid user-facing position.
    pub fn new(position: usize) -> Option<Self> {
        if position == 0 {
            None
        } else {
            Some(Self(position))
        }
    }

    pub fn from_offset(offset: usize) -> Self {
        Self(offset + 1)
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// The 0-based storage offset.
    pub fn offset(self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for TaskIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskIndex {
    type Err = String;

    /// Parses a base-10 position. Range checking against a concrete list is
    /// done by [`crate::task_list::TaskList::resolve`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<usize>()
            .ok()
            .and_then(TaskIndex::new)
            .ok_or_else(|| format!("Invalid task number: {}", s))
    }
}

/// A task paired with its current display position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTask {
    pub index: TaskIndex,
    pub task: Task,
}

/// Lazily pairs each task with its 1-based position, in list order.
///
/// The iterator is finite and cheap to rebuild; call this again after any
/// mutation rather than holding on to old positions.
pub fn index_tasks(tasks: &[Task]) -> impl Iterator<Item = DisplayTask> + '_ {
    tasks
        .iter()
        .enumerate()
        .map(|(offset, task)| DisplayTask {
            index: TaskIndex::from_offset(offset),
            task: task.clone(),
        })
}
