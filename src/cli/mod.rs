//! Command-line interface for tyklint.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`command`] - The lint run pipeline and exit-code mapping

pub mod args;
pub mod command;

pub use args::{Cli, Commands, CompletionsArgs};
pub use command::{run, CommandResult, LintCommand};
