//! # Session Loop
//!
//! A session is one run of the program: load the tasks, greet, handle input
//! lines until told to stop, then save.
//!
//! Input arrives as [`SessionEvent`]s on a channel. A reader thread
//! ([`spawn_line_reader`]) turns stdin into `Line` events and the binary's
//! signal handler sends `Interrupted`. The session itself runs on one thread
//! and handles each event to completion before taking the next, so the task
//! list is never shared and needs no locking.
//!
//! Saving is explicit: whoever drives the session calls
//! [`Session::shutdown`] once the loop returns, whatever the reason it
//! stopped.

use crate::api::TaskApi;
use crate::config::AppConfig;
use crate::store::TaskRepository;
use std::io::{self, BufRead, Write};
use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};
use tracing::{error, info, warn};

pub mod command;
pub mod dispatch;
mod print;

pub use dispatch::{Dispatcher, Flow};
pub use print::ListStyle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// One line of input, without its line terminator.
    Line(String),
    /// Input reached end of file or could no longer be read.
    Closed,
    /// The process was asked to terminate.
    Interrupted,
}

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Quit,
    InputClosed,
    Interrupted,
}

impl Exit {
    pub fn code(self) -> i32 {
        match self {
            Exit::Quit | Exit::InputClosed => 0,
            Exit::Interrupted => 130,
        }
    }
}

pub struct Session<S: TaskRepository, W: Write> {
    dispatcher: Dispatcher<S>,
    out: W,
    owner: String,
    shut_down: bool,
}

impl<S: TaskRepository, W: Write> Session<S, W> {
    pub fn new(api: TaskApi<S>, config: &AppConfig, out: W) -> Self {
        Self {
            dispatcher: Dispatcher::new(api, ListStyle::from(config)),
            out,
            owner: config.owner.clone(),
            shut_down: false,
        }
    }

    /// Loads the persisted tasks and prints the banner.
    ///
    /// A load failure is logged, the unreadable data is backed up, and the
    /// session starts with an empty list.
    pub fn start(&mut self) -> io::Result<()> {
        let api = self.dispatcher.api_mut();
        if let Err(e) = api.load() {
            error!(error = %e, "could not load tasks, starting with an empty list");
            if e.is_persistence() {
                if let Err(e) = api.back_up() {
                    error!(error = %e, "could not back up the task file");
                }
            }
        }
        print::banner(&mut self.out, &self.owner)
    }

    /// Handles a single event. Returns `Some` when the session should stop.
    pub fn handle(&mut self, event: SessionEvent) -> io::Result<Option<Exit>> {
        match event {
            SessionEvent::Line(line) => match self.dispatcher.dispatch(&line, &mut self.out)? {
                Flow::Continue => Ok(None),
                Flow::Quit => Ok(Some(Exit::Quit)),
            },
            SessionEvent::Closed => {
                info!("input closed");
                Ok(Some(Exit::InputClosed))
            }
            SessionEvent::Interrupted => {
                warn!("interrupted, saving tasks before exit");
                Ok(Some(Exit::Interrupted))
            }
        }
    }

    /// Processes events in arrival order until one ends the session.
    pub fn run(&mut self, events: &Receiver<SessionEvent>) -> io::Result<Exit> {
        for event in events.iter() {
            if let Some(exit) = self.handle(event)? {
                return Ok(exit);
            }
        }
        // Every sender is gone, which means no more input can arrive.
        Ok(Exit::InputClosed)
    }

    /// Saves the task list. Only the first call writes; a failed save is
    /// logged and leaves the file as it was.
    pub fn shutdown(&mut self) -> bool {
        if self.shut_down {
            return true;
        }
        self.shut_down = true;

        match self.dispatcher.api_mut().save() {
            Ok(()) => true,
            Err(e) => {
                error!(error = %e, "could not save tasks");
                false
            }
        }
    }

    pub fn api(&self) -> &TaskApi<S> {
        self.dispatcher.api()
    }

    pub fn output(&self) -> &W {
        &self.out
    }
}

/// Reads `input` line by line on a background thread, forwarding each line
/// as a [`SessionEvent::Line`] and finishing with [`SessionEvent::Closed`].
///
/// Bytes that are not valid UTF-8 become U+FFFD; only a read error or end of
/// input stops the reader.
pub fn spawn_line_reader<R>(mut input: R, events: Sender<SessionEvent>) -> JoinHandle<()>
where
    R: BufRead + Send + 'static,
{
    thread::spawn(move || {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match input.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {
                    if events.send(SessionEvent::Line(decode_line(&buf))).is_err() {
                        return;
                    }
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    warn!(error = %e, "stopped reading input");
                    break;
                }
            }
        }
        let _ = events.send(SessionEvent::Closed);
    })
}

fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}
