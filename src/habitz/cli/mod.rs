//! # CLI Layer
//!
//! One possible client of the habitz library, and the only place that knows
//! about the terminal: argument parsing, confirmation prompts, colours and
//! exit codes. Everything it does goes through [`habitz::api::HabitzApi`].
//!
//! - `setup`: clap definitions
//! - `commands`: context setup, logging, dispatch and per-command handlers
//! - `print`: output formatting

mod commands;
mod print;
mod setup;

pub use commands::run;
