//! rofi-todo - a todo list driven by an application launcher
//!
//! Every invocation takes at most one selection string, applies it to the task list and prints
//! the refreshed list for the launcher to show again. This library provides:
//! - Selection interpretation and command dispatch
//! - Inline tag extraction (`p:2:p` priority, `a:2024-06-01 13:53,text:a` alarms)
//! - SQLite storage with an archive of cleared tasks
//! - Notification, alarm and clipboard side effects
//! - Configuration and output formatting
//!
//! # Example
//!
//! ```no_run
//! use rofi_todo::cli::run;
//!
//! fn main() {
//!     if let Err(e) = run() {
//!         eprintln!("Error: {:#}", e);
//!         std::process::exit(1);
//!     }
//! }
//! ```

pub mod cli;
pub mod config;
pub mod db;
pub mod effects;
pub mod models;
pub mod repo;
pub mod tags;
pub mod utils;
