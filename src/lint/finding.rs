//! Findings: the engine's sole evaluation output.

use serde_json::Value;

use super::severity::SeveritySet;

/// One rule violation. Immutable once produced; created per evaluation run
/// and discarded after reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    /// Name of the rule that fired.
    pub rule: String,
    /// Report label of the document(s) involved.
    pub label: String,
    /// The rule's severity set (for procedural rules, possibly decided at
    /// evaluation time).
    pub severities: SeveritySet,
    /// Human-readable message.
    pub message: String,
    /// The observed config value, when the rule asks for it.
    pub observed: Option<Value>,
}

impl Finding {
    /// Create a finding with no observed value.
    pub fn new(
        rule: impl Into<String>,
        label: impl Into<String>,
        severities: SeveritySet,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule: rule.into(),
            label: label.into(),
            severities,
            message: message.into(),
            observed: None,
        }
    }

    /// Attach the observed config value.
    pub fn with_observed(mut self, value: Value) -> Self {
        self.observed = Some(value);
        self
    }
}
