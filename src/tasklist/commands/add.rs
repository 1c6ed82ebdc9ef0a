use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TaskError};
use crate::model::Task;
use crate::task_list::TaskList;

pub fn run(list: &mut TaskList, description: &str) -> Result<CmdResult> {
    if description.is_empty() {
        return Err(TaskError::validation("missing description"));
    }

    list.push(Task::new(description));
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Task added: {}",
        description
    ))))
}
