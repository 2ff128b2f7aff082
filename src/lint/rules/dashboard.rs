//! Dashboard config checks.

use crate::error::Result;
use crate::lint::predicate::Predicate;
use crate::lint::rule::Rule;
use crate::lint::severity::Severity;

/// The ordered dashboard rule table.
pub fn rules() -> Result<Vec<Rule>> {
    Ok(vec![Rule::declarative("force_api_defaults")
        .predicate(Predicate::IsSet)
        .expected(true)
        .severities(&[Severity::Fatal])
        .message("is set. tyk-sync will not be able to match up synced policies with APIs.")
        .build()?])
}
