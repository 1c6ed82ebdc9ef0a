use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TaskError};
use crate::task_list::{TaskList, INVALID_TASK_NUMBER};

use super::helpers::require_index;

pub fn toggle(list: &mut TaskList, index: Option<&str>) -> Result<CmdResult> {
    change_done(list, index, |done| !done)
}

pub fn check(list: &mut TaskList, index: Option<&str>) -> Result<CmdResult> {
    change_done(list, index, |_| true)
}

pub fn uncheck(list: &mut TaskList, index: Option<&str>) -> Result<CmdResult> {
    change_done(list, index, |_| false)
}

fn change_done(
    list: &mut TaskList,
    index: Option<&str>,
    next: impl FnOnce(bool) -> bool,
) -> Result<CmdResult> {
    let idx = require_index(list, index)?;
    let task = list
        .get_mut(idx)
        .ok_or_else(|| TaskError::validation(INVALID_TASK_NUMBER))?;
    task.done = next(task.done);

    let state = if task.done { "done" } else { "not done" };
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Task {} marked as {}: {}",
        idx, state, task.description
    )));
    Ok(result)
}
