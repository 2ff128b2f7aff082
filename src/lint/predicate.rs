//! Comparison predicates for declarative rules.
//!
//! Every predicate is a pure, total function over `(expected, actual)`.
//! Comparing incompatible types never panics: ordered comparisons between
//! different types are `false`, while [`Predicate::Equal`] and
//! [`Predicate::NotEqual`] treat cross-type values as unequal. Numbers
//! compare numerically, so an integer `25` and a float `25.0` are equal.

use std::cmp::Ordering;

use serde_json::Value;

/// The comparison a declarative rule applies to the resolved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// Actual is truthy (non-empty string, non-zero number, `true`, ...).
    IsSet,
    /// Actual is falsy.
    IsUnset,
    Equal,
    NotEqual,
    GreaterThan,
    LessThan,
    GreaterOrEqual,
    LessOrEqual,
    /// Actual resolved at all. Absence is handled by the evaluator, so a
    /// value reaching this predicate is present by construction; unlike
    /// [`Predicate::IsSet`] this fires for empty-but-present values too.
    IsPresent,
}

impl Predicate {
    /// Evaluate the predicate. Returning `true` triggers the rule's finding.
    pub fn eval(self, expected: &Value, actual: &Value) -> bool {
        match self {
            Predicate::IsSet => truthy(actual),
            Predicate::IsUnset => !truthy(actual),
            Predicate::Equal => values_equal(expected, actual),
            Predicate::NotEqual => !values_equal(expected, actual),
            Predicate::GreaterThan => {
                compare(actual, expected) == Some(Ordering::Greater)
            }
            Predicate::LessThan => compare(actual, expected) == Some(Ordering::Less),
            Predicate::GreaterOrEqual => matches!(
                compare(actual, expected),
                Some(Ordering::Greater) | Some(Ordering::Equal)
            ),
            Predicate::LessOrEqual => matches!(
                compare(actual, expected),
                Some(Ordering::Less) | Some(Ordering::Equal)
            ),
            Predicate::IsPresent => true,
        }
    }
}

/// Config-value truthiness: `null`, `false`, `0`, `""`, and empty
/// containers are falsy, everything else is truthy.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        // Numeric equality across integer/float representations.
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        _ => a == b,
    }
}

/// Ordering between two values of compatible types; `None` for anything
/// else (mixed types, booleans, containers).
fn compare(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64()?.partial_cmp(&y.as_f64()?),
        (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
        _ => None,
    }
}
