//! # API Facade
//!
//! [`TaskApi`] is the single entry point for task operations. It owns the
//! session's [`TaskList`] and the [`TaskRepository`] it came from, and
//! forwards each operation to its `commands::*` module.
//!
//! The facade does no formatting and no terminal I/O: it returns
//! `Result<CmdResult>` and leaves rendering to the session. Being generic over
//! the repository lets the session and dispatcher be tested against
//! `TaskApi<InMemoryStore>` without a filesystem.

use crate::commands;
use crate::error::Result;
use crate::store::TaskRepository;
use crate::task_list::TaskList;

pub struct TaskApi<S: TaskRepository> {
    store: S,
    tasks: TaskList,
}

impl<S: TaskRepository> TaskApi<S> {
    /// Creates the facade with an empty list. Call [`load`](Self::load) to
    /// pull in the persisted tasks.
    pub fn new(store: S) -> Self {
        Self {
            store,
            tasks: TaskList::new(),
        }
    }

    /// Replaces the in-memory list with the persisted one.
    ///
    /// On failure the in-memory list is left empty.
    pub fn load(&mut self) -> Result<()> {
        self.tasks = TaskList::new();
        self.tasks = self.store.load()?;
        Ok(())
    }

    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.tasks)
    }

    /// Keeps a copy of the persisted data aside. Used after a failed
    /// [`load`](Self::load), before anything gets saved over it.
    pub fn back_up(&mut self) -> Result<()> {
        self.store.back_up()
    }

    pub fn add_task(&mut self, description: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.tasks, description)
    }

    pub fn remove_task(&mut self, index: Option<&str>) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.tasks, index)
    }

    pub fn edit_task(&mut self, args: &[&str]) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.tasks, args)
    }

    pub fn toggle_task(&mut self, index: Option<&str>) -> Result<commands::CmdResult> {
        commands::status::toggle(&mut self.tasks, index)
    }

    pub fn check_task(&mut self, index: Option<&str>) -> Result<commands::CmdResult> {
        commands::status::check(&mut self.tasks, index)
    }

    pub fn uncheck_task(&mut self, index: Option<&str>) -> Result<commands::CmdResult> {
        commands::status::uncheck(&mut self.tasks, index)
    }

    pub fn list_tasks(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.tasks)
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
