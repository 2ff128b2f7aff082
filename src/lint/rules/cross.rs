//! Cross-document consistency checks.
//!
//! The gateway and dashboard must agree on their shared secrets; a mismatch
//! breaks node registration in a way that is hard to diagnose from either
//! file alone. Absent values compare as empty strings, so two documents
//! that configure nothing still agree.

use serde_json::Value;

use crate::document::{DocumentKind, DocumentSet};
use crate::lint::finding::Finding;
use crate::lint::path::lookup;
use crate::lint::registry::CrossRule;
use crate::lint::severity::{Severity, SeveritySet};

const REQUIRES: &[DocumentKind] = &[DocumentKind::Gateway, DocumentKind::Dashboard];

/// The cross-document rule table.
pub fn rules() -> Vec<CrossRule> {
    vec![
        CrossRule::new("secret_agreement", REQUIRES, check_secret),
        CrossRule::new("node_secret_agreement", REQUIRES, check_node_secret),
    ]
}

fn string_at<'a>(root: &'a Value, path: &str) -> &'a str {
    lookup(root, path).and_then(Value::as_str).unwrap_or("")
}

fn agreement(
    docs: &DocumentSet,
    rule: &str,
    gateway_path: &str,
    dashboard_path: &str,
) -> Option<Finding> {
    let gateway = docs.get(DocumentKind::Gateway)?;
    let dashboard = docs.get(DocumentKind::Dashboard)?;
    let gw_value = string_at(gateway.root(), gateway_path);
    let dash_value = string_at(dashboard.root(), dashboard_path);
    if gw_value == dash_value {
        return None;
    }
    Some(Finding::new(
        rule,
        format!("{}/{}", gateway.label(), dashboard.label()),
        SeveritySet::of(&[Severity::Fatal]),
        format!(
            "gateway {gateway_path} does not match dashboard {dashboard_path}. \
             The dashboard will reject this gateway"
        ),
    ))
}

fn check_secret(docs: &DocumentSet) -> Option<Finding> {
    agreement(docs, "secret_agreement", "secret", "tyk_api_config.Secret")
}

fn check_node_secret(docs: &DocumentSet) -> Option<Finding> {
    agreement(
        docs,
        "node_secret_agreement",
        "node_secret",
        "shared_node_secret",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use serde_json::json;

    fn docs(gateway: serde_json::Value, dashboard: serde_json::Value) -> DocumentSet {
        let mut set = DocumentSet::new();
        set.insert(Document::new(DocumentKind::Gateway, gateway));
        set.insert(Document::new(DocumentKind::Dashboard, dashboard));
        set
    }

    #[test]
    fn mismatched_secret_is_fatal_and_names_both_documents() {
        let set = docs(
            json!({"secret": "abc"}),
            json!({"tyk_api_config": {"Secret": "xyz"}}),
        );
        let f = check_secret(&set).unwrap();
        assert!(f.severities.contains(Severity::Fatal));
        assert_eq!(f.label, "Gateway/Dashboard");
    }

    #[test]
    fn matching_secret_is_quiet() {
        let set = docs(
            json!({"secret": "abc"}),
            json!({"tyk_api_config": {"Secret": "abc"}}),
        );
        assert!(check_secret(&set).is_none());
    }

    #[test]
    fn both_unconfigured_secrets_agree() {
        let set = docs(json!({}), json!({}));
        assert!(check_secret(&set).is_none());
        assert!(check_node_secret(&set).is_none());
    }

    #[test]
    fn one_sided_node_secret_is_a_mismatch() {
        let set = docs(json!({"node_secret": "abc"}), json!({}));
        let f = check_node_secret(&set).unwrap();
        assert!(f.message.contains("shared_node_secret"));
    }
}
