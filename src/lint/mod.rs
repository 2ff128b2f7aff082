//! The rule evaluation engine.
//!
//! # Overview
//!
//! - **Paths** ([`KeyPath`]) address values inside parsed config trees;
//!   missing keys resolve to "absent", never an error
//! - **Rules** ([`Rule`]) are declarative (path + predicate + expected) or
//!   procedural (a function over the whole document)
//! - **Rule sets** ([`RuleSet`], [`Registry`]) are static ordered tables,
//!   validated at startup
//! - **Evaluation** ([`lint_all`]) is a pure function from documents and
//!   rules to an ordered sequence of [`Finding`]s
//! - **Reporting** ([`output`]) applies the configured severity set and
//!   renders one line (or JSON record) per reportable finding
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use tyklint::document::{Document, DocumentKind, DocumentSet};
//! use tyklint::lint::{lint_all, Registry};
//!
//! let mut docs = DocumentSet::new();
//! docs.insert(Document::new(
//!     DocumentKind::Gateway,
//!     json!({"health_check": {"enable_health_checks": true}}),
//! ));
//! let registry = Registry::builtin().unwrap();
//! let findings = lint_all(&docs, &registry);
//! assert!(findings
//!     .iter()
//!     .any(|f| f.rule == "health_check.enable_health_checks"));
//! ```

pub mod eval;
pub mod finding;
pub mod output;
pub mod path;
pub mod predicate;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod severity;

pub use eval::{evaluate_cross, evaluate_document, lint_all};
pub use finding::Finding;
pub use output::{Formatter, HumanFormatter, JsonFormatter};
pub use path::KeyPath;
pub use predicate::Predicate;
pub use registry::{CrossRule, Registry, RuleSet};
pub use rule::{DeclarativeRule, Rule, RuleKind};
pub use severity::{default_level, parse_level, Severity, SeveritySet};
