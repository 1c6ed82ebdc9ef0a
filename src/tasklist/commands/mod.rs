//! # Command Layer
//!
//! One module per operation. Each `run` takes the [`TaskList`](crate::task_list::TaskList)
//! plus already-tokenized arguments and returns a [`CmdResult`]. Nothing here
//! writes to stdout or touches the filesystem; rendering belongs to the
//! session and persistence to the store.

use crate::index::DisplayTask;

pub mod add;
pub mod edit;
pub mod greet;
pub mod helpers;
pub mod list;
pub mod remove;
pub mod status;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_tasks: Vec<DisplayTask>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed_tasks(mut self, tasks: Vec<DisplayTask>) -> Self {
        self.listed_tasks = tasks;
        self
    }
}
