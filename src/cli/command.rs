//! The lint run pipeline.
//!
//! Parses the level token, loads whichever documents were named on the
//! command line, builds the builtin registry, evaluates, and renders.
//! Findings never affect the exit code; only usage errors do.

use std::io::Write;

use clap::CommandFactory;

use super::args::{Cli, Commands};
use crate::document::{Document, DocumentKind, DocumentSet};
use crate::error::{Result, TyklintError};
use crate::lint::output::{Formatter, HumanFormatter, JsonFormatter};
use crate::lint::{lint_all, parse_level, Registry};

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,
    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatch the parsed command line.
pub fn run(cli: &Cli) -> Result<CommandResult> {
    match &cli.command {
        Some(Commands::Completions(args)) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "tyklint", &mut std::io::stdout());
            Ok(CommandResult::success())
        }
        None => LintCommand::new(cli).execute(),
    }
}

/// The default lint action.
pub struct LintCommand<'a> {
    cli: &'a Cli,
}

impl<'a> LintCommand<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self { cli }
    }

    /// Execute the lint run. Usage errors (bad level token, unreadable or
    /// unparsable config) are reported to stderr and return exit code 2
    /// before any evaluation happens.
    pub fn execute(&self) -> Result<CommandResult> {
        let configured = match parse_level(&self.cli.level) {
            Ok(set) => set,
            Err(e @ TyklintError::UnknownLevel { .. }) => {
                eprintln!("error: {e}");
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        let docs = match self.load_documents() {
            Ok(docs) => docs,
            Err(
                e @ (TyklintError::DocumentRead { .. } | TyklintError::DocumentParse { .. }),
            ) => {
                eprintln!("error: {e}");
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        let registry = Registry::builtin()?;
        let findings = lint_all(&docs, &registry);
        tracing::debug!(count = findings.len(), "evaluation complete");

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        match self.cli.format.as_str() {
            "json" => JsonFormatter::new(configured).format(&findings, &mut out)?,
            _ => {
                let use_color = !self.cli.no_color && console::colors_enabled();
                HumanFormatter::new(configured, use_color).format(&findings, &mut out)?;
            }
        }
        out.flush()?;

        Ok(CommandResult::success())
    }

    fn load_documents(&self) -> Result<DocumentSet> {
        let mut docs = DocumentSet::new();
        let sources = [
            (DocumentKind::Gateway, &self.cli.gateway),
            (DocumentKind::Pump, &self.cli.pump),
            (DocumentKind::Dashboard, &self.cli.dashboard),
        ];
        for (kind, path) in sources {
            if let Some(path) = path {
                docs.insert(Document::load(kind, path)?);
            }
        }
        Ok(docs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn command_result_constructors() {
        let ok = CommandResult::success();
        assert!(ok.success);
        assert_eq!(ok.exit_code, 0);
        let bad = CommandResult::failure(2);
        assert!(!bad.success);
        assert_eq!(bad.exit_code, 2);
    }

    #[test]
    fn unknown_level_is_a_usage_failure() {
        let cli = Cli::parse_from(["tyklint", "--level", "loud"]);
        let result = run(&cli).unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn missing_gateway_file_is_a_usage_failure() {
        let cli = Cli::parse_from(["tyklint", "-g", "/nonexistent/tyk.conf"]);
        let result = run(&cli).unwrap();
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn no_documents_is_a_clean_run() {
        let cli = Cli::parse_from(["tyklint"]);
        let result = run(&cli).unwrap();
        assert!(result.success);
    }
}
