//! JSON output for tooling integration.

use std::io::Write;

use serde::Serialize;
use serde_json::Value;

use super::Formatter;
use crate::lint::finding::Finding;
use crate::lint::severity::{Severity, SeveritySet};

/// Formats findings as machine-readable JSON.
pub struct JsonFormatter {
    configured: SeveritySet,
}

#[derive(Serialize)]
struct JsonOutput {
    findings: Vec<JsonFinding>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonFinding {
    rule: String,
    document: String,
    severity: String,
    severities: Vec<String>,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    observed: Option<Value>,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    fatal: usize,
    warn: usize,
    perf: usize,
    info: usize,
}

impl JsonFormatter {
    pub fn new(configured: SeveritySet) -> Self {
        Self { configured }
    }
}

impl Formatter for JsonFormatter {
    fn format<W: Write>(&self, findings: &[Finding], writer: &mut W) -> std::io::Result<()> {
        let mut out = JsonOutput {
            findings: Vec::new(),
            summary: JsonSummary {
                total: 0,
                fatal: 0,
                warn: 0,
                perf: 0,
                info: 0,
            },
        };
        for finding in findings {
            let Some(severity) = finding.severities.first_match(self.configured) else {
                continue;
            };
            out.summary.total += 1;
            match severity {
                Severity::Fatal => out.summary.fatal += 1,
                Severity::Warn => out.summary.warn += 1,
                Severity::Perf => out.summary.perf += 1,
                Severity::Info => out.summary.info += 1,
            }
            out.findings.push(JsonFinding {
                rule: finding.rule.clone(),
                document: finding.label.clone(),
                severity: severity.to_string(),
                severities: finding.severities.iter().map(|s| s.to_string()).collect(),
                message: finding.message.clone(),
                observed: finding.observed.clone(),
            });
        }
        serde_json::to_writer_pretty(&mut *writer, &out)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::severity::parse_level;
    use serde_json::json;

    fn render(configured: SeveritySet, findings: &[Finding]) -> Value {
        let mut out = Vec::new();
        JsonFormatter::new(configured)
            .format(findings, &mut out)
            .unwrap();
        serde_json::from_slice(&out).unwrap()
    }

    #[test]
    fn emits_findings_with_matched_severity_and_summary() {
        let findings = vec![
            Finding::new(
                "health_check.enable_health_checks",
                "Gateway",
                SeveritySet::of(&[Severity::Perf, Severity::Warn]),
                "is set.",
            ),
            Finding::new(
                "force_api_defaults",
                "Dashboard",
                SeveritySet::of(&[Severity::Fatal]),
                "is set.",
            ),
        ];
        let out = render(parse_level("warn").unwrap(), &findings);
        assert_eq!(out["summary"]["total"], json!(2));
        assert_eq!(out["summary"]["warn"], json!(1));
        assert_eq!(out["summary"]["fatal"], json!(1));
        assert_eq!(out["findings"][0]["severity"], json!("Warn"));
        assert_eq!(out["findings"][0]["document"], json!("Gateway"));
    }

    #[test]
    fn filtered_findings_are_absent_and_uncounted() {
        let findings = vec![Finding::new(
            "hash_key_function",
            "Gateway",
            SeveritySet::of(&[Severity::Info]),
            "is defined.",
        )];
        let out = render(parse_level("fatal").unwrap(), &findings);
        assert_eq!(out["summary"]["total"], json!(0));
        assert_eq!(out["findings"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn observed_value_is_carried_through() {
        let findings = vec![Finding::new(
            "uptime_tests.config.time_wait",
            "Gateway",
            SeveritySet::of(&[Severity::Warn]),
            "is greater than ~25 seconds.",
        )
        .with_observed(json!(60))];
        let out = render(parse_level("warn").unwrap(), &findings);
        assert_eq!(out["findings"][0]["observed"], json!(60));
    }
}
