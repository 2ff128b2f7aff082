//! Configuration documents.
//!
//! A [`Document`] is one parsed config file held as an opaque
//! [`serde_json::Value`] tree, tagged with the component it configures
//! ([`DocumentKind`]) and a label used only for reporting. A
//! [`DocumentSet`] holds the documents loaded for one run; any subset
//! may be present, and rules that need an absent document are skipped.

use std::path::Path;

use serde_json::Value;

use crate::error::{Result, TyklintError};

/// Which component a config file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Gateway,
    Pump,
    Dashboard,
}

impl DocumentKind {
    /// All kinds in evaluation order.
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::Gateway,
        DocumentKind::Pump,
        DocumentKind::Dashboard,
    ];

    /// Default report label for documents of this kind.
    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::Gateway => "Gateway",
            DocumentKind::Pump => "Pump",
            DocumentKind::Dashboard => "Dashboard",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One parsed configuration file.
///
/// The tree is read-only once loaded. The label is used purely for
/// reporting; rule logic never branches on it.
#[derive(Debug, Clone)]
pub struct Document {
    kind: DocumentKind,
    label: String,
    root: Value,
}

impl Document {
    /// Wrap an already-parsed tree, labeled with the kind's default label.
    pub fn new(kind: DocumentKind, root: Value) -> Self {
        Self {
            kind,
            label: kind.label().to_string(),
            root,
        }
    }

    /// Override the report label (e.g. with a source path).
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Load and parse a config file.
    ///
    /// Files with a `.yml`/`.yaml` extension are parsed as YAML, everything
    /// else as JSON. Read and parse failures are usage errors.
    pub fn load(kind: DocumentKind, path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| TyklintError::DocumentRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yml") | Some("yaml")
        );
        let root: Value = if is_yaml {
            serde_yaml::from_str(&text).map_err(|e| TyklintError::DocumentParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        } else {
            serde_json::from_str(&text).map_err(|e| TyklintError::DocumentParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        };

        tracing::debug!(kind = %kind, path = %path.display(), "loaded config");
        Ok(Self::new(kind, root))
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn root(&self) -> &Value {
        &self.root
    }
}

/// The documents loaded for one lint run.
#[derive(Debug, Clone, Default)]
pub struct DocumentSet {
    gateway: Option<Document>,
    pump: Option<Document>,
    dashboard: Option<Document>,
}

impl DocumentSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document, replacing any previous document of the same kind.
    pub fn insert(&mut self, doc: Document) {
        match doc.kind() {
            DocumentKind::Gateway => self.gateway = Some(doc),
            DocumentKind::Pump => self.pump = Some(doc),
            DocumentKind::Dashboard => self.dashboard = Some(doc),
        }
    }

    /// Get the document of a kind, if loaded.
    pub fn get(&self, kind: DocumentKind) -> Option<&Document> {
        match kind {
            DocumentKind::Gateway => self.gateway.as_ref(),
            DocumentKind::Pump => self.pump.as_ref(),
            DocumentKind::Dashboard => self.dashboard.as_ref(),
        }
    }

    /// Whether a document of this kind was loaded.
    pub fn contains(&self, kind: DocumentKind) -> bool {
        self.get(kind).is_some()
    }

    /// Iterate over loaded documents in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        DocumentKind::ALL.iter().filter_map(|k| self.get(*k))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn document_defaults_to_kind_label() {
        let doc = Document::new(DocumentKind::Gateway, json!({}));
        assert_eq!(doc.label(), "Gateway");
    }

    #[test]
    fn document_label_override() {
        let doc = Document::new(DocumentKind::Pump, json!({})).with_label("/etc/tyk/pump.conf");
        assert_eq!(doc.label(), "/etc/tyk/pump.conf");
        assert_eq!(doc.kind(), DocumentKind::Pump);
    }

    #[test]
    fn set_insert_and_get() {
        let mut docs = DocumentSet::new();
        assert!(docs.is_empty());
        docs.insert(Document::new(DocumentKind::Dashboard, json!({"a": 1})));
        assert!(docs.contains(DocumentKind::Dashboard));
        assert!(!docs.contains(DocumentKind::Gateway));
        assert_eq!(
            docs.get(DocumentKind::Dashboard).unwrap().root()["a"],
            json!(1)
        );
    }

    #[test]
    fn set_iterates_in_evaluation_order() {
        let mut docs = DocumentSet::new();
        docs.insert(Document::new(DocumentKind::Dashboard, json!({})));
        docs.insert(Document::new(DocumentKind::Gateway, json!({})));
        docs.insert(Document::new(DocumentKind::Pump, json!({})));

        let kinds: Vec<DocumentKind> = docs.iter().map(|d| d.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                DocumentKind::Gateway,
                DocumentKind::Pump,
                DocumentKind::Dashboard
            ]
        );
    }

    #[test]
    fn load_parses_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tyk.conf");
        std::fs::write(&path, r#"{"secret": "abc"}"#).unwrap();
        let doc = Document::load(DocumentKind::Gateway, &path).unwrap();
        assert_eq!(doc.root()["secret"], json!("abc"));
    }

    #[test]
    fn load_parses_yaml_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tyk.yml");
        std::fs::write(&path, "secret: abc\nuse_db_app_configs: true\n").unwrap();
        let doc = Document::load(DocumentKind::Gateway, &path).unwrap();
        assert_eq!(doc.root()["use_db_app_configs"], json!(true));
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let err = Document::load(
            DocumentKind::Gateway,
            Path::new("/nonexistent/tyk.conf"),
        )
        .unwrap_err();
        assert!(matches!(err, TyklintError::DocumentRead { .. }));
    }

    #[test]
    fn load_bad_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tyk.conf");
        std::fs::write(&path, "{not json").unwrap();
        let err = Document::load(DocumentKind::Gateway, &path).unwrap_err();
        assert!(matches!(err, TyklintError::DocumentParse { .. }));
    }
}
