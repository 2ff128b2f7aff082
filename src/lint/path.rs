//! Dotted-path addressing into config documents.
//!
//! A [`KeyPath`] is the parsed form of a dot-separated address like
//! `health_check.enable_health_checks`. Resolution descends through maps
//! only; a missing key or a non-map intermediate node yields "absent",
//! never an error. Malformed paths (empty segments) are rejected when the
//! path is parsed, which happens while rule tables are built, so a bad
//! path in a rule is fatal at startup rather than at evaluation time.

use serde_json::Value;
use thiserror::Error;

/// A parse-time invalid dotted path.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid path '{path}': {reason}")]
pub struct InvalidPath {
    pub path: String,
    pub reason: String,
}

/// A parsed dotted path into a document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath {
    raw: String,
    segments: Vec<String>,
}

impl KeyPath {
    /// Parse a dot-separated path. Empty paths and empty segments are
    /// configuration errors.
    pub fn parse(raw: &str) -> Result<Self, InvalidPath> {
        if raw.is_empty() {
            return Err(InvalidPath {
                path: raw.to_string(),
                reason: "path is empty".to_string(),
            });
        }
        let segments: Vec<String> = raw.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(InvalidPath {
                path: raw.to_string(),
                reason: "empty path segment".to_string(),
            });
        }
        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// The original dotted form.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Resolve this path against a tree. `None` means absent: a segment was
    /// missing or an intermediate node was not a map.
    pub fn resolve<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        let mut node = root;
        for segment in &self.segments {
            node = node.as_object()?.get(segment)?;
        }
        Some(node)
    }

    /// Whether every segment resolves to a defined value (explicit `null`
    /// counts as present).
    pub fn has(&self, root: &Value) -> bool {
        self.resolve(root).is_some()
    }

    /// Resolve, falling back to `default` when the path is absent.
    pub fn get<'a>(&self, root: &'a Value, default: &'a Value) -> &'a Value {
        self.resolve(root).unwrap_or(default)
    }
}

impl std::fmt::Display for KeyPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Resolve a dotted path given as a plain string.
///
/// Used by procedural rules for their internal lookups, where the path is a
/// literal and parse-time validation has nothing extra to catch.
pub fn lookup<'a>(root: &'a Value, dotted: &str) -> Option<&'a Value> {
    let mut node = root;
    for segment in dotted.split('.') {
        node = node.as_object()?.get(segment)?;
    }
    Some(node)
}
