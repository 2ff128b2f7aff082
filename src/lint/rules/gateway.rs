//! Gateway config checks.
//!
//! Known gotchas in `tyk.conf`: performance traps (health checks, detailed
//! recording), a startup panic trigger, renamed defaults, and the
//! connection-string requirements (procedural, see
//! [`connection`](super::connection)).

use super::connection;
use crate::error::Result;
use crate::lint::predicate::Predicate;
use crate::lint::rule::Rule;
use crate::lint::severity::Severity;

/// The ordered gateway rule table.
pub fn rules() -> Result<Vec<Rule>> {
    let mut rules = vec![
        Rule::declarative("health_check.enable_health_checks")
            .predicate(Predicate::IsSet)
            .expected(true)
            .severities(&[Severity::Perf, Severity::Warn])
            .message("is set. Performance will suffer, redis will have added load.")
            .build()?,
        Rule::declarative("health_check.health_check_value_timeouts")
            .predicate(Predicate::GreaterThan)
            .expected(0)
            .report_actual()
            .severities(&[Severity::Warn])
            .message(
                "is greater than 0. This will panic many versions of the gateway \
                 if the API healthcheck endpoint is called",
            )
            .build()?,
        Rule::declarative("hash_key_function")
            .predicate(Predicate::IsSet)
            .expected("")
            .report_actual()
            .severities(&[Severity::Info])
            .message(
                "is defined. Check for hash_key_function_fallback and the possibility \
                 of lost encrypted certs and keys if it has been changed",
            )
            .build()?,
        Rule::declarative("health_check_endpoint_name")
            .predicate(Predicate::NotEqual)
            .expected("/hello")
            .report_actual()
            .severities(&[Severity::Info])
            .message("is defined. /hello has been renamed")
            .build()?,
        Rule::declarative("analytics_config.enable_detailed_recording")
            .predicate(Predicate::IsSet)
            .expected(true)
            .severities(&[Severity::Perf, Severity::Warn])
            .message("is set. Performance will suffer, redis will have added load.")
            .build()?,
        Rule::declarative("uptime_tests.disable")
            .predicate(Predicate::IsUnset)
            .expected(false)
            .severities(&[Severity::Info])
            .message("is False. Look for uptime checks in APIs")
            .build()?,
        Rule::declarative("uptime_tests.config.time_wait")
            .predicate(Predicate::GreaterThan)
            .expected(25)
            .report_actual()
            .severities(&[Severity::Warn])
            .message("is greater than ~25 seconds. Uptime tests may never trigger")
            .build()?,
    ];
    rules.extend(connection::rules());
    Ok(rules)
}
