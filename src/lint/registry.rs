//! Rule sets and the builtin registry.
//!
//! A [`RuleSet`] is a named, ordered collection of rules scoped to one
//! document kind. Order matters only for reproducible output; rules are
//! side-effect-free and order-independent in outcome. Duplicate rule names
//! are rejected when the set is built, so a bad table is fatal at startup.

use std::collections::HashSet;

use super::finding::Finding;
use super::rule::Rule;
use super::rules;
use crate::document::{DocumentKind, DocumentSet};
use crate::error::{Result, TyklintError};

/// A named, ordered collection of rules for one document kind.
#[derive(Debug, Clone)]
pub struct RuleSet {
    name: String,
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Build a rule set, rejecting duplicate rule names.
    pub fn new(name: &str, rules: Vec<Rule>) -> Result<Self> {
        let mut seen = HashSet::new();
        for rule in &rules {
            if !seen.insert(rule.name().to_string()) {
                return Err(TyklintError::RuleDefinition {
                    rule: rule.name().to_string(),
                    message: format!("duplicate rule name in set '{name}'"),
                });
            }
        }
        Ok(Self {
            name: name.to_string(),
            rules,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// A check that correlates values across documents.
///
/// The evaluator skips the rule cleanly when any required document is
/// absent; the check itself can assume they are all loaded.
#[derive(Debug, Clone)]
pub struct CrossRule {
    pub name: String,
    pub requires: &'static [DocumentKind],
    pub check: fn(&DocumentSet) -> Option<Finding>,
}

impl CrossRule {
    pub fn new(
        name: &str,
        requires: &'static [DocumentKind],
        check: fn(&DocumentSet) -> Option<Finding>,
    ) -> Self {
        Self {
            name: name.to_string(),
            requires,
            check,
        }
    }
}

/// The static rule tables, keyed by document kind plus the cross-document
/// scope. Built once at process start and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Registry {
    gateway: RuleSet,
    pump: RuleSet,
    dashboard: RuleSet,
    cross: Vec<CrossRule>,
}

impl Registry {
    /// Build the builtin rule tables. Any malformed table (bad path,
    /// duplicate name) fails here, before evaluation starts.
    pub fn builtin() -> Result<Self> {
        let registry = Self {
            gateway: RuleSet::new("Gateway", rules::gateway::rules()?)?,
            pump: RuleSet::new("Pump", rules::pump::rules()?)?,
            dashboard: RuleSet::new("Dashboard", rules::dashboard::rules()?)?,
            cross: rules::cross::rules(),
        };
        let mut seen = HashSet::new();
        for rule in &registry.cross {
            if !seen.insert(rule.name.clone()) {
                return Err(TyklintError::RuleDefinition {
                    rule: rule.name.clone(),
                    message: "duplicate rule name in cross-document set".to_string(),
                });
            }
        }
        Ok(registry)
    }

    /// The rule set for one document kind.
    pub fn rules_for(&self, kind: DocumentKind) -> &RuleSet {
        match kind {
            DocumentKind::Gateway => &self.gateway,
            DocumentKind::Pump => &self.pump,
            DocumentKind::Dashboard => &self.dashboard,
        }
    }

    pub fn cross_rules(&self) -> &[CrossRule] {
        &self.cross
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::rule::Rule;
    use crate::lint::severity::Severity;

    #[test]
    fn rule_set_rejects_duplicate_names() {
        let rules = vec![
            Rule::declarative("a.b").message("one").build().unwrap(),
            Rule::declarative("a.b").message("two").build().unwrap(),
        ];
        let err = RuleSet::new("Test", rules).unwrap_err();
        assert!(matches!(err, TyklintError::RuleDefinition { .. }));
    }

    #[test]
    fn rule_set_preserves_order() {
        let rules = vec![
            Rule::declarative("first").message("1").build().unwrap(),
            Rule::declarative("second").message("2").build().unwrap(),
        ];
        let set = RuleSet::new("Test", rules).unwrap();
        let names: Vec<&str> = set.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
    }

    #[test]
    fn builtin_registry_builds() {
        let registry = Registry::builtin().unwrap();
        assert!(!registry.rules_for(DocumentKind::Gateway).is_empty());
        assert!(!registry.rules_for(DocumentKind::Pump).is_empty());
        assert!(!registry.rules_for(DocumentKind::Dashboard).is_empty());
        assert!(!registry.cross_rules().is_empty());
    }

    #[test]
    fn builtin_gateway_has_health_check_rule() {
        let registry = Registry::builtin().unwrap();
        assert!(registry
            .rules_for(DocumentKind::Gateway)
            .iter()
            .any(|r| r.name() == "health_check.enable_health_checks"));
    }

    #[test]
    fn builtin_cross_rules_require_gateway_and_dashboard() {
        let registry = Registry::builtin().unwrap();
        for rule in registry.cross_rules() {
            assert!(rule.requires.contains(&DocumentKind::Gateway));
            assert!(rule.requires.contains(&DocumentKind::Dashboard));
        }
    }

    #[test]
    fn builtin_rule_names_are_unique_per_set() {
        let registry = Registry::builtin().unwrap();
        for kind in DocumentKind::ALL {
            let set = registry.rules_for(kind);
            let mut seen = HashSet::new();
            for rule in set.iter() {
                assert!(seen.insert(rule.name().to_string()), "dup: {}", rule.name());
            }
        }
    }

    #[test]
    fn builtin_declarative_severities_are_nonempty() {
        let registry = Registry::builtin().unwrap();
        for kind in DocumentKind::ALL {
            for rule in registry.rules_for(kind).iter() {
                if let crate::lint::rule::RuleKind::Declarative(d) = rule.kind() {
                    assert!(
                        Severity::CANONICAL.iter().any(|s| d.severities.contains(*s)),
                        "rule '{}' has no severities",
                        rule.name()
                    );
                }
            }
        }
    }
}
