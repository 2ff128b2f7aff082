//! Dashboard connection-string checks.
//!
//! Whether `db_app_conf_options.connection_string` and
//! `policies.policy_connection_string` are required depends on
//! `use_db_app_configs`, `disable_dashboard_zeroconf`, and
//! `policies.policy_source`. No declarative form expresses that branching,
//! and the severity depends on what was found (an empty required string is
//! Fatal, a merely-redundant one is Info), so these are procedural rules.
//! Each returns at most one finding.

use serde_json::Value;

use crate::document::Document;
use crate::lint::finding::Finding;
use crate::lint::path::lookup;
use crate::lint::predicate::truthy;
use crate::lint::rule::Rule;
use crate::lint::severity::{Severity, SeveritySet};

const APP_CS: &str = "db_app_conf_options.connection_string";
const POLICY_CS: &str = "policies.policy_connection_string";

/// The procedural connection-string rules, in output order.
pub fn rules() -> Vec<Rule> {
    vec![
        Rule::procedural(APP_CS, check_app_connection_string),
        Rule::procedural(POLICY_CS, check_policy_connection_string),
        Rule::procedural("connection_string_match", check_connection_strings_match),
    ]
}

fn flag(root: &Value, path: &str) -> bool {
    lookup(root, path).map(truthy).unwrap_or(false)
}

fn is_blank(root: &Value, path: &str) -> bool {
    !flag(root, path)
}

fn check_app_connection_string(doc: &Document) -> Option<Finding> {
    let root = doc.root();
    if !flag(root, "use_db_app_configs") {
        return Some(Finding::new(
            APP_CS,
            doc.label(),
            SeveritySet::of(&[Severity::Info]),
            "is not required. use_db_app_configs is false, running without managed API configs",
        ));
    }
    if is_blank(root, APP_CS) {
        return Some(Finding::new(
            APP_CS,
            doc.label(),
            SeveritySet::of(&[Severity::Fatal]),
            "is empty. A dashboard connection string is required when use_db_app_configs is set",
        ));
    }
    if !flag(root, "disable_dashboard_zeroconf") {
        return Some(Finding::new(
            APP_CS,
            doc.label(),
            SeveritySet::of(&[Severity::Info]),
            "is set while dashboard zeroconf is still enabled. The connection string \
             makes zeroconf redundant",
        ));
    }
    None
}

fn check_policy_connection_string(doc: &Document) -> Option<Finding> {
    let root = doc.root();
    if lookup(root, "policies.policy_source").and_then(Value::as_str) != Some("service") {
        return None;
    }
    // Required when zeroconf is off, or whenever the key exists at all.
    let required = flag(root, "disable_dashboard_zeroconf") || lookup(root, POLICY_CS).is_some();
    if required && is_blank(root, POLICY_CS) {
        return Some(Finding::new(
            POLICY_CS,
            doc.label(),
            SeveritySet::of(&[Severity::Fatal]),
            "is empty. A policy connection string is required when policy_source is \"service\"",
        ));
    }
    None
}

fn check_connection_strings_match(doc: &Document) -> Option<Finding> {
    let root = doc.root();
    let app = lookup(root, APP_CS).and_then(Value::as_str).unwrap_or("");
    let policy = lookup(root, POLICY_CS).and_then(Value::as_str).unwrap_or("");
    if !app.is_empty() && !policy.is_empty() && app != policy {
        return Some(Finding::new(
            "connection_string_match",
            doc.label(),
            SeveritySet::of(&[Severity::Fatal]),
            format!(
                "db_app_conf_options.connection_string ('{app}') and \
                 policies.policy_connection_string ('{policy}') differ. \
                 Both must point at the same dashboard"
            ),
        ));
    }
    None
}
