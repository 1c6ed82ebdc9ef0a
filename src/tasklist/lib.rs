//! # Tasklist Architecture
//!
//! Tasklist is a small to-do list manager driven by one command per input line.
//! The task logic lives in this library; the `tasks` binary only wires stdin,
//! stdout and signals to it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session Layer (session/, driven by main.rs)                │
//! │  - Parses input lines, routes commands, prints results      │
//! │  - Owns the event loop and the final save                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Holds the in-memory list between load and save           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure list manipulation, returns `CmdResult`              │
//! │  - No I/O whatsoever                                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - TaskRepository trait                                     │
//! │  - JsonFileStore (production), InMemoryStore (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything below the session layer takes plain arguments and returns
//! `Result<CmdResult>`. Nothing there writes to stdout or exits the process.
//!
//! ## Task numbers
//!
//! Users see tasks numbered from 1. Conversion to and from vector offsets
//! happens in one place, [`index::TaskIndex`], and nowhere else.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all list operations
//! - [`commands`]: Logic for each command
//! - [`session`]: Line parsing, dispatch, printing and the event loop
//! - [`store`]: Persistence abstraction and implementations
//! - [`task_list`]: The ordered task collection
//! - [`model`]: The `Task` record
//! - [`index`]: 1-based task numbers
//! - [`config`]: Home directory and `config.json`
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod session;
pub mod store;
pub mod task_list;
