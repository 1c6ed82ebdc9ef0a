use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::task_list::TaskList;

pub fn run(list: &TaskList) -> Result<CmdResult> {
    if list.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("no tasks")));
    }
    Ok(CmdResult::default().with_listed_tasks(list.entries().collect()))
}
