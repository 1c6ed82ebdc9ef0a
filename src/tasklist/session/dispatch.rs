use crate::api::TaskApi;
use crate::commands::greet;
use crate::store::TaskRepository;
use std::io::{self, Write};
use tracing::debug;

use super::command::{Command, ParsedLine};
use super::print::{self, ListStyle};

/// Whether the session keeps reading after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Routes one input line at a time to the API and prints the outcome.
///
/// Holds no state of its own besides the API; every line is handled the same
/// way regardless of what came before.
pub struct Dispatcher<S: TaskRepository> {
    api: TaskApi<S>,
    style: ListStyle,
}

impl<S: TaskRepository> Dispatcher<S> {
    pub fn new(api: TaskApi<S>, style: ListStyle) -> Self {
        Self { api, style }
    }

    pub fn api(&self) -> &TaskApi<S> {
        &self.api
    }

    pub fn api_mut(&mut self) -> &mut TaskApi<S> {
        &mut self.api
    }

    /// Handles one raw line. Input errors are printed and never returned;
    /// the only error is a failure to write to `out`.
    pub fn dispatch<W: Write>(&mut self, raw: &str, out: &mut W) -> io::Result<Flow> {
        let parsed = ParsedLine::parse(raw);
        print::trace(out, &parsed)?;

        let command = match Command::from_parsed(&parsed) {
            Ok(command) => command,
            Err(e) => {
                debug!(line = parsed.line, "unknown command");
                print::error(out, &e)?;
                return Ok(Flow::Continue);
            }
        };
        debug!(command = parsed.name, args = parsed.args.len(), "dispatching");

        let outcome = match command {
            Command::Quit => {
                print::farewell(out)?;
                return Ok(Flow::Quit);
            }
            Command::Hello(name) => Ok(greet::hello(&name)),
            Command::Help => Ok(greet::help()),
            Command::List => self.api.list_tasks(),
            Command::Add(description) => self.api.add_task(&description),
            Command::Remove(index) => self.api.remove_task(index),
            Command::Edit(args) => self.api.edit_task(&args),
            Command::Toggle(index) => self.api.toggle_task(index),
            Command::Check(index) => self.api.check_task(index),
            Command::Uncheck(index) => self.api.uncheck_task(index),
        };

        match outcome {
            Ok(result) => print::result(out, &result, self.style)?,
            Err(e) => {
                debug!(command = parsed.name, error = %e, "command rejected");
                print::error(out, &e)?;
            }
        }
        Ok(Flow::Continue)
    }
}
