//! # Storage Layer
//!
//! The task list is persisted through the [`TaskRepository`] trait so the
//! session can run against a real file or an in-memory stand-in.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileStore`]: production storage, a single JSON file
//! - [`memory::InMemoryStore`]: testing storage, no filesystem access
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   {
//!     "task": "Do projects",
//!     "done": false
//!   }
//! ]
//! ```
//!
//! A pretty-printed array of task records, in list order. Positions are not
//! stored: the array order is the list order.
//!
//! ## Access Pattern
//!
//! A session loads once at startup and saves once at shutdown. If the load
//! fails, the session asks the store to back up what is there before carrying
//! on with an empty list. Nothing guards
//! against another process writing the same file in between; the last save
//! wins.

use crate::error::Result;
use crate::task_list::TaskList;

pub mod fs;
pub mod memory;

/// Where a task list comes from and goes back to.
pub trait TaskRepository {
    /// Load the persisted list.
    ///
    /// A store with nothing persisted yet returns the seed list. Read and
    /// parse failures are errors; deciding what to do with them is up to the
    /// caller.
    fn load(&self) -> Result<TaskList>;

    /// Persist the list, replacing whatever was stored before.
    fn save(&mut self, tasks: &TaskList) -> Result<()>;

    /// Copy whatever is currently persisted aside, so that a later `save`
    /// does not destroy data that `load` could not read.
    fn back_up(&mut self) -> Result<()>;
}
