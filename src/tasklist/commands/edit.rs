use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TaskError};
use crate::index::TaskIndex;
use crate::task_list::{TaskList, INVALID_TASK_NUMBER};

/// Replaces a task's description.
///
/// `args` are positional: `[text]` edits the last task, `[index, text]` edits
/// task `index`. Anything else is rejected.
pub fn run(list: &mut TaskList, args: &[&str]) -> Result<CmdResult> {
    let (index, text) = match args {
        [] => return Err(TaskError::validation("missing task description")),
        [text] => {
            let Some(last) = list.last_index() else {
                return Ok(CmdResult::default().with_message(CmdMessage::info("no tasks to edit")));
            };
            (last, *text)
        }
        [raw, text] => (list.resolve(raw)?, *text),
        _ => return Err(TaskError::validation("invalid input")),
    };

    set_description(list, index, text)
}

fn set_description(list: &mut TaskList, index: TaskIndex, text: &str) -> Result<CmdResult> {
    let task = list
        .get_mut(index)
        .ok_or_else(|| TaskError::validation(INVALID_TASK_NUMBER))?;
    task.description = text.to_string();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Task {} edited: {}",
        index, text
    )));
    Ok(result)
}
