//! Human-readable output.
//!
//! One line per reportable finding:
//!
//! ```text
//! [Warn]Gateway: 'health_check.enable_health_checks' is set. Performance will suffer, redis will have added load.
//! ```
//!
//! The severity tag is the single matched severity: when a rule belongs to
//! several configured severities, the one earliest in canonical order wins.

use std::io::Write;

use console::style;
use serde_json::Value;

use super::Formatter;
use crate::lint::finding::Finding;
use crate::lint::severity::{Severity, SeveritySet};

/// Formats findings for terminal display.
pub struct HumanFormatter {
    configured: SeveritySet,
    use_color: bool,
}

impl HumanFormatter {
    pub fn new(configured: SeveritySet, use_color: bool) -> Self {
        Self {
            configured,
            use_color,
        }
    }

    fn tag(&self, severity: Severity) -> String {
        let text = format!("[{severity}]");
        if !self.use_color {
            return text;
        }
        let styled = match severity {
            Severity::Fatal => style(text).red().bold(),
            Severity::Warn => style(text).yellow(),
            Severity::Perf => style(text).magenta(),
            Severity::Info => style(text).cyan(),
        };
        styled.to_string()
    }
}

/// Render an observed config value the way it appears in the file, without
/// quoting strings.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl Formatter for HumanFormatter {
    fn format<W: Write>(&self, findings: &[Finding], writer: &mut W) -> std::io::Result<()> {
        for finding in findings {
            let Some(severity) = finding.severities.first_match(self.configured) else {
                continue;
            };
            write!(writer, "{}{}: '{}'", self.tag(severity), finding.label, finding.rule)?;
            if let Some(ref observed) = finding.observed {
                write!(writer, " ({})", render_value(observed))?;
            }
            writeln!(writer, " {}", finding.message)?;
        }
        Ok(())
    }
}
