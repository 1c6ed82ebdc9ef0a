//! Commands that do not touch the task list.

use crate::commands::{CmdMessage, CmdResult};

pub const HELP_LINES: &[&str] = &[
    "Available commands:",
    "  hello [name]      - Says hello",
    "  quit              - Exits the application",
    "  exit              - Exits the application",
    "  help              - Lists all the possible commands",
    "  list              - Lists all tasks",
    "  add <task>        - Adds a new task",
    "  remove [n]        - Removes the last task, or task n",
    "  edit [n] <text>   - Edits the last task, or task n",
    "  toggle <n>        - Toggles task n between done and not done",
    "  check <n>         - Marks task n as done",
    "  uncheck <n>       - Marks task n as not done",
];

pub fn hello(name: &str) -> CmdResult {
    let greeting = if name.is_empty() {
        "hello!".to_string()
    } else {
        format!("hello {}!", name)
    };
    CmdResult::default().with_message(CmdMessage::info(greeting))
}

pub fn help() -> CmdResult {
    let mut result = CmdResult::default();
    for line in HELP_LINES {
        result.add_message(CmdMessage::info(*line));
    }
    result
}
