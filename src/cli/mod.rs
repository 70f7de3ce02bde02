//! Command-line interface layer.
//!
//! Each subcommand is one job: it loads the configuration, runs the pipelines it
//! stands for and prints a one-line summary per pipeline. Library users can call the
//! pipelines directly instead.

pub mod args;
mod commands;
mod context;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command, GlobalArgs, LanguageArgs};
pub use exit_status::ExitStatus;
pub use run::run_cli;
