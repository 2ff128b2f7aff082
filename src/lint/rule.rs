//! The rule model.
//!
//! A [`Rule`] is a named check with one of two shapes:
//!
//! - **Declarative** — a path, a predicate, and an expected value. Covers
//!   the common "this key should(n't) look like X" checks.
//! - **Procedural** — a plain function over the whole document, for checks
//!   whose logic no declarative form can express (multi-field decision
//!   trees, severity chosen by what was found).
//!
//! Tagged-variant dispatch keeps both shapes in one registry and keeps
//! evaluation order deterministic.

use serde_json::Value;

use super::finding::Finding;
use super::path::KeyPath;
use super::predicate::Predicate;
use super::severity::{Severity, SeveritySet};
use crate::document::Document;
use crate::error::{Result, TyklintError};

/// A procedural check. Performs its own lookups against the document and
/// returns zero or one finding, assigning its own severity set.
pub type ProceduralCheck = fn(&Document) -> Option<Finding>;

/// The declarative rule shape.
#[derive(Debug, Clone)]
pub struct DeclarativeRule {
    pub path: KeyPath,
    pub predicate: Predicate,
    pub expected: Value,
    pub report_actual: bool,
    pub severities: SeveritySet,
    pub message: String,
}

/// The two rule shapes.
#[derive(Debug, Clone)]
pub enum RuleKind {
    Declarative(DeclarativeRule),
    Procedural(ProceduralCheck),
}

/// A named check. The name doubles as the default report label and must be
/// unique within its rule set.
#[derive(Debug, Clone)]
pub struct Rule {
    name: String,
    kind: RuleKind,
}

impl Rule {
    /// Start a declarative rule on the given dotted path. The rule name
    /// defaults to the path itself.
    pub fn declarative(path: &str) -> DeclarativeBuilder {
        DeclarativeBuilder {
            name: None,
            path: path.to_string(),
            predicate: Predicate::IsSet,
            expected: Value::Bool(true),
            report_actual: false,
            severities: SeveritySet::of(&[Severity::Info]),
            message: String::new(),
        }
    }

    /// Wrap a procedural check under the given name.
    pub fn procedural(name: &str, check: ProceduralCheck) -> Self {
        Self {
            name: name.to_string(),
            kind: RuleKind::Procedural(check),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }
}

/// Builder for declarative rules.
///
/// Defaults: predicate [`Predicate::IsSet`], expected `true`, severity
/// {Info}, actual value not reported.
#[derive(Debug)]
pub struct DeclarativeBuilder {
    name: Option<String>,
    path: String,
    predicate: Predicate,
    expected: Value,
    report_actual: bool,
    severities: SeveritySet,
    message: String,
}

impl DeclarativeBuilder {
    /// Override the rule name (default: the path).
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn predicate(mut self, predicate: Predicate) -> Self {
        self.predicate = predicate;
        self
    }

    pub fn expected(mut self, expected: impl Into<Value>) -> Self {
        self.expected = expected.into();
        self
    }

    /// Include the observed config value in the finding.
    pub fn report_actual(mut self) -> Self {
        self.report_actual = true;
        self
    }

    pub fn severities(mut self, levels: &[Severity]) -> Self {
        self.severities = SeveritySet::of(levels);
        self
    }

    pub fn message(mut self, message: &str) -> Self {
        self.message = message.to_string();
        self
    }

    /// Finish the rule. Fails on malformed paths, which makes a bad rule
    /// table fatal at startup rather than at evaluation time.
    pub fn build(self) -> Result<Rule> {
        let name = self.name.unwrap_or_else(|| self.path.clone());
        let path = KeyPath::parse(&self.path).map_err(|e| TyklintError::RuleDefinition {
            rule: name.clone(),
            message: e.to_string(),
        })?;
        Ok(Rule {
            name,
            kind: RuleKind::Declarative(DeclarativeRule {
                path,
                predicate: self.predicate,
                expected: self.expected,
                report_actual: self.report_actual,
                severities: self.severities,
                message: self.message,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn declarative_defaults() {
        let rule = Rule::declarative("health_check.enable_health_checks")
            .message("is set")
            .build()
            .unwrap();
        assert_eq!(rule.name(), "health_check.enable_health_checks");
        match rule.kind() {
            RuleKind::Declarative(d) => {
                assert_eq!(d.predicate, Predicate::IsSet);
                assert_eq!(d.expected, json!(true));
                assert!(!d.report_actual);
                assert!(d.severities.contains(Severity::Info));
            }
            RuleKind::Procedural(_) => panic!("expected declarative rule"),
        }
    }

    #[test]
    fn declarative_builder_sets_all_fields() {
        let rule = Rule::declarative("uptime_tests.config.time_wait")
            .predicate(Predicate::GreaterThan)
            .expected(25)
            .report_actual()
            .severities(&[Severity::Warn])
            .message("is greater than ~25 seconds")
            .build()
            .unwrap();
        match rule.kind() {
            RuleKind::Declarative(d) => {
                assert_eq!(d.predicate, Predicate::GreaterThan);
                assert_eq!(d.expected, json!(25));
                assert!(d.report_actual);
                assert!(d.severities.contains(Severity::Warn));
                assert!(!d.severities.contains(Severity::Info));
            }
            RuleKind::Procedural(_) => panic!("expected declarative rule"),
        }
    }

    #[test]
    fn declarative_name_override() {
        let rule = Rule::declarative("secret")
            .name("gateway_secret_set")
            .message("is set")
            .build()
            .unwrap();
        assert_eq!(rule.name(), "gateway_secret_set");
    }

    #[test]
    fn bad_path_fails_at_build_time() {
        let err = Rule::declarative("health_check..enabled")
            .message("broken")
            .build()
            .unwrap_err();
        assert!(matches!(err, TyklintError::RuleDefinition { .. }));
    }

    #[test]
    fn procedural_rule_holds_check() {
        fn never_fires(_doc: &Document) -> Option<Finding> {
            None
        }
        let rule = Rule::procedural("connection_string_match", never_fires);
        assert_eq!(rule.name(), "connection_string_match");
        assert!(matches!(rule.kind(), RuleKind::Procedural(_)));
    }
}
