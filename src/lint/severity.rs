//! Severity levels and severity sets.
//!
//! Severities are categories, not a strict total order: a rule can belong to
//! several at once (e.g. both Perf and Warn), and a run is configured with a
//! *set* of severities rather than a single threshold. A finding is
//! reportable iff its rule's set intersects the configured set.

use crate::error::{Result, TyklintError};

/// Urgency category on a rule or finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Warn,
    Perf,
    Fatal,
}

impl Severity {
    /// Canonical ordering, most urgent first. Used to pick the single
    /// severity tag to render when several match the configured set.
    pub const CANONICAL: [Severity; 4] = [
        Severity::Fatal,
        Severity::Warn,
        Severity::Perf,
        Severity::Info,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Warn => "Warn",
            Severity::Perf => "Perf",
            Severity::Fatal => "Fatal",
        }
    }

    fn bit(self) -> u8 {
        match self {
            Severity::Fatal => 1,
            Severity::Warn => 2,
            Severity::Perf => 4,
            Severity::Info => 8,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of severities, used both for rule membership and run configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeveritySet(u8);

impl SeveritySet {
    pub const EMPTY: SeveritySet = SeveritySet(0);

    /// Build a set from a slice of levels.
    pub fn of(levels: &[Severity]) -> Self {
        levels.iter().fold(Self::EMPTY, |set, s| set.with(*s))
    }

    pub fn with(self, severity: Severity) -> Self {
        Self(self.0 | severity.bit())
    }

    pub fn contains(self, severity: Severity) -> bool {
        self.0 & severity.bit() != 0
    }

    pub fn intersects(self, other: SeveritySet) -> bool {
        self.0 & other.0 != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Members in canonical order.
    pub fn iter(self) -> impl Iterator<Item = Severity> {
        Severity::CANONICAL.into_iter().filter(move |s| self.contains(*s))
    }

    /// The severity to report a finding under: the first member of the
    /// intersection with `configured`, in canonical order. `None` means the
    /// finding is filtered out entirely.
    pub fn first_match(self, configured: SeveritySet) -> Option<Severity> {
        Severity::CANONICAL
            .into_iter()
            .find(|s| self.contains(*s) && configured.contains(*s))
    }
}

/// Default configured set when no level flag is given.
pub fn default_level() -> SeveritySet {
    SeveritySet::of(&[Severity::Warn, Severity::Fatal])
}

/// Parse a user-supplied level token into a configured severity set.
///
/// Tokens are case-insensitive and accept single-letter abbreviations.
/// `fatal` selects only fatal findings; `warn` and `info` are cumulative;
/// `perf` selects the performance category alone.
pub fn parse_level(token: &str) -> Result<SeveritySet> {
    match token.to_ascii_lowercase().as_str() {
        "f" | "fatal" => Ok(SeveritySet::of(&[Severity::Fatal])),
        "w" | "warn" => Ok(SeveritySet::of(&[Severity::Warn, Severity::Fatal])),
        "i" | "info" => Ok(SeveritySet::of(&[
            Severity::Info,
            Severity::Warn,
            Severity::Fatal,
        ])),
        "p" | "perf" => Ok(SeveritySet::of(&[Severity::Perf])),
        _ => Err(TyklintError::UnknownLevel {
            token: token.to_string(),
        }),
    }
}
