use crate::error::{Result, TaskError};

/// A trimmed input line split into a command name and its arguments.
///
/// Splitting is on single spaces, so `"add  milk"` has arguments `["", "milk"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    pub line: &'a str,
    pub name: &'a str,
    pub args: Vec<&'a str>,
}

impl<'a> ParsedLine<'a> {
    pub fn parse(raw: &'a str) -> Self {
        let line = raw.trim();
        let mut parts = line.split(' ');
        let name = parts.next().unwrap_or_default();
        Self {
            line,
            name,
            args: parts.collect(),
        }
    }

    /// Arguments rejoined as free text.
    pub fn rest(&self) -> String {
        self.args.join(" ")
    }

    fn first_arg(&self) -> Option<&'a str> {
        self.args.first().copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Quit,
    Hello(String),
    Help,
    List,
    Add(String),
    Remove(Option<&'a str>),
    Edit(Vec<&'a str>),
    Toggle(Option<&'a str>),
    Check(Option<&'a str>),
    Uncheck(Option<&'a str>),
}

impl<'a> Command<'a> {
    /// Matches the command name exactly (case-sensitive).
    pub fn from_parsed(parsed: &ParsedLine<'a>) -> Result<Self> {
        let command = match parsed.name {
            "quit" | "exit" => Command::Quit,
            "hello" => Command::Hello(parsed.rest()),
            "help" => Command::Help,
            "list" => Command::List,
            "add" => Command::Add(parsed.rest()),
            "remove" => Command::Remove(parsed.first_arg()),
            "edit" => Command::Edit(parsed.args.clone()),
            "toggle" => Command::Toggle(parsed.first_arg()),
            "check" => Command::Check(parsed.first_arg()),
            "uncheck" => Command::Uncheck(parsed.first_arg()),
            _ => return Err(TaskError::UnknownCommand(parsed.line.to_string())),
        };
        Ok(command)
    }
}
