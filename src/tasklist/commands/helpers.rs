use crate::error::{Result, TaskError};
use crate::index::TaskIndex;
use crate::task_list::TaskList;

pub const MISSING_TASK_NUMBER: &str = "missing task number";

/// Resolves an index argument that the command cannot do without.
pub fn require_index(list: &TaskList, raw: Option<&str>) -> Result<TaskIndex> {
    let raw = raw.ok_or_else(|| TaskError::validation(MISSING_TASK_NUMBER))?;
    list.resolve(raw)
}
