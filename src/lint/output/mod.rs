//! Finding formatters.
//!
//! Formatters are the only consumers of severity filtering: evaluation
//! produces unfiltered findings, and each formatter emits only those whose
//! severity set intersects the configured set.

pub mod human;
pub mod json;

use std::io::Write;

use super::finding::Finding;

/// Trait for rendering findings to a writer.
pub trait Formatter {
    fn format<W: Write>(&self, findings: &[Finding], writer: &mut W) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
