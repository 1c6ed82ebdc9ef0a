use crate::api::{CmdMessage, CmdResult, MessageLevel};
use crate::config::AppConfig;
use crate::error::TaskError;
use crate::index::DisplayTask;
use colored::Colorize;
use std::io::{self, Write};

use super::command::ParsedLine;

const DONE_MARKER: &str = "[✓]";
const OPEN_MARKER: &str = "[ ]";
const BANNER_RULE: &str = "--------------------";
const FAREWELL: &str = "Quitting now, goodbye!";

/// How task lines are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListStyle {
    /// Prefix each task with `[✓]` or `[ ]`.
    pub show_status: bool,
}

impl From<&AppConfig> for ListStyle {
    fn from(config: &AppConfig) -> Self {
        Self {
            show_status: config.show_status,
        }
    }
}

pub(super) fn banner<W: Write>(out: &mut W, owner: &str) -> io::Result<()> {
    writeln!(out, "Welcome to {}'s application!", owner)?;
    writeln!(out, "{}", BANNER_RULE)
}

pub(super) fn farewell<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", FAREWELL)
}

/// Echo of what was parsed, printed before the command runs.
pub(super) fn trace<W: Write>(out: &mut W, parsed: &ParsedLine<'_>) -> io::Result<()> {
    let line = format!(
        "Received command: {}, with arguments: {}",
        parsed.name,
        parsed.rest()
    );
    writeln!(out, "{}", line.dimmed())
}

pub(super) fn result<W: Write>(out: &mut W, result: &CmdResult, style: ListStyle) -> io::Result<()> {
    tasks(out, &result.listed_tasks, style)?;
    messages(out, &result.messages)
}

pub(super) fn error<W: Write>(out: &mut W, err: &TaskError) -> io::Result<()> {
    match err {
        TaskError::UnknownCommand(_) => writeln!(out, "{}", err.to_string().yellow()),
        _ => writeln!(out, "{}", format!("Error: {}", err).red()),
    }
}

fn messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.normal())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
        }
    }
    Ok(())
}

fn tasks<W: Write>(out: &mut W, tasks: &[DisplayTask], style: ListStyle) -> io::Result<()> {
    for dt in tasks {
        let description = if dt.task.done {
            dt.task.description.dimmed()
        } else {
            dt.task.description.normal()
        };
        if style.show_status {
            let marker = if dt.task.done {
                DONE_MARKER.green()
            } else {
                OPEN_MARKER.normal()
            };
            writeln!(out, "{}. {} {}", dt.index, marker, description)?;
        } else {
            writeln!(out, "{}. {}", dt.index, description)?;
        }
    }
    Ok(())
}
