//! Error types for tyklint operations.
//!
//! This module defines [`TyklintError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Usage errors (bad level token, unreadable document) terminate the run
//!   before any evaluation happens
//! - Rule-definition errors (bad path, duplicate rule name) surface when the
//!   registry is built, never during evaluation
//! - A path missing from a document is not an error at all; the evaluator
//!   resolves it via the missing-value policy or skips the rule

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for tyklint operations.
#[derive(Debug, Error)]
pub enum TyklintError {
    /// Config file could not be read.
    #[error("Failed to read config at {path}: {message}")]
    DocumentRead { path: PathBuf, message: String },

    /// Config file could not be parsed as JSON or YAML.
    #[error("Failed to parse config at {path}: {message}")]
    DocumentParse { path: PathBuf, message: String },

    /// Unknown severity level token on the command line.
    #[error("Unknown log level '{token}' (expected fatal, warn, info, or perf)")]
    UnknownLevel { token: String },

    /// A rule table is malformed (bad path syntax, duplicate name).
    #[error("Invalid rule '{rule}': {message}")]
    RuleDefinition { rule: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for tyklint operations.
pub type Result<T> = std::result::Result<T, TyklintError>;
