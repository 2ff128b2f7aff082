//! Pump config checks.

use crate::error::Result;
use crate::lint::predicate::Predicate;
use crate::lint::rule::Rule;
use crate::lint::severity::Severity;

/// The ordered pump rule table.
pub fn rules() -> Result<Vec<Rule>> {
    Ok(vec![Rule::declarative("dont_purge_uptime_data")
        .predicate(Predicate::IsSet)
        .expected(true)
        .severities(&[Severity::Warn])
        .message("is set. Uptime checks will never be moved to redis.")
        .build()?])
}
