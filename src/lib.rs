//! tyklint - lint Tyk config files for errors and gotchas.
//!
//! tyklint checks gateway, pump, and dashboard config files against a
//! library of diagnostic rules and reports violations at a configurable
//! severity, catching known operational gotchas (performance traps,
//! startup-fatal misconfigurations, renamed defaults, cross-file
//! inconsistencies) before they reach production.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and the run pipeline
//! - [`document`] - Parsed config documents and loading
//! - [`error`] - Error types and result alias
//! - [`lint`] - The rule evaluation engine
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use tyklint::document::{Document, DocumentKind, DocumentSet};
//! use tyklint::lint::{lint_all, parse_level, Registry};
//!
//! let mut docs = DocumentSet::new();
//! docs.insert(Document::new(
//!     DocumentKind::Dashboard,
//!     json!({"force_api_defaults": true}),
//! ));
//! let registry = Registry::builtin().unwrap();
//! let findings = lint_all(&docs, &registry);
//! let configured = parse_level("fatal").unwrap();
//! assert!(findings
//!     .iter()
//!     .any(|f| f.severities.intersects(configured)));
//! ```

pub mod cli;
pub mod document;
pub mod error;
pub mod lint;

pub use error::{Result, TyklintError};
