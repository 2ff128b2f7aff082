//! Rule evaluation.
//!
//! Evaluation is a pure function from (documents, registry) to an ordered
//! sequence of findings: no shared state, no I/O, re-entrant. Unfiltered
//! findings come out of here; severity filtering belongs to the reporter.
//!
//! Missing-value policy for declarative rules: if the path is absent and the
//! rule's expected value is boolean-typed, the predicate is re-run against
//! `false` ("missing implies disabled"). For any other expected type the
//! rule is silently skipped; there is no safe default to assume.

use serde_json::Value;

use super::finding::Finding;
use super::registry::{CrossRule, Registry, RuleSet};
use super::rule::{DeclarativeRule, Rule, RuleKind};
use crate::document::{Document, DocumentSet};

/// Run every rule in the set against one document, in set order.
pub fn evaluate_document(doc: &Document, rules: &RuleSet) -> Vec<Finding> {
    let mut findings = Vec::new();
    for rule in rules.iter() {
        let finding = match rule.kind() {
            RuleKind::Declarative(decl) => evaluate_declarative(rule, decl, doc),
            RuleKind::Procedural(check) => check(doc),
        };
        if let Some(finding) = finding {
            findings.push(finding);
        }
    }
    findings
}

fn evaluate_declarative(rule: &Rule, decl: &DeclarativeRule, doc: &Document) -> Option<Finding> {
    let absent_as_false = Value::Bool(false);
    let actual = match decl.path.resolve(doc.root()) {
        Some(actual) => actual,
        None if decl.expected.is_boolean() => &absent_as_false,
        None => {
            tracing::trace!(rule = rule.name(), doc = doc.label(), "path absent, skipped");
            return None;
        }
    };
    if !decl.predicate.eval(&decl.expected, actual) {
        return None;
    }
    let mut finding = Finding::new(rule.name(), doc.label(), decl.severities, &decl.message);
    if decl.report_actual {
        finding = finding.with_observed(actual.clone());
    }
    Some(finding)
}

/// Run the cross-document rules over the full set of loaded documents.
/// A rule whose required documents are not all present is skipped cleanly.
pub fn evaluate_cross(docs: &DocumentSet, rules: &[CrossRule]) -> Vec<Finding> {
    let mut findings = Vec::new();
    for rule in rules {
        if !rule.requires.iter().all(|kind| docs.contains(*kind)) {
            tracing::trace!(rule = %rule.name, "required document absent, skipped");
            continue;
        }
        if let Some(finding) = (rule.check)(docs) {
            findings.push(finding);
        }
    }
    findings
}

/// Evaluate everything: each loaded document against its rule set, then the
/// cross-document rules, in deterministic order.
pub fn lint_all(docs: &DocumentSet, registry: &Registry) -> Vec<Finding> {
    let mut findings = Vec::new();
    for doc in docs.iter() {
        findings.extend(evaluate_document(doc, registry.rules_for(doc.kind())));
    }
    findings.extend(evaluate_cross(docs, registry.cross_rules()));
    findings
}
