//! Loose-equality comparison between resolved and expected values.
//!
//! Expected values come from JSON test definitions while resolved values
//! may come from an XML tree where everything is a string, so comparison
//! coerces across scalar kinds. The coercion table is fixed:
//!
//! 1. structurally equal values are equal;
//! 2. numbers equal numeric strings when the string parses to the same
//!    `f64` (so `5` matches `"5"` and `"5.0"`);
//! 3. booleans equal the strings `"true"`/`"false"`, case-insensitively;
//! 4. a path that resolved to nothing equals an expected `null`, and
//!    nothing else;
//! 5. arrays and objects never coerce.

use serde_json::Value;

/// Compares a resolved value (`None` = path not found) against an
/// expected value using the coercion table above.
#[must_use]
pub fn loosely_equal(actual: Option<&Value>, expected: &Value) -> bool {
    match actual {
        None => expected.is_null(),
        Some(actual) => scalar_equal(actual, expected),
    }
}

#[allow(clippy::float_cmp)] // coercion is defined as exact f64 equality
fn scalar_equal(a: &Value, b: &Value) -> bool {
    if a == b {
        return true;
    }

    match (a, b) {
        (Value::Number(n), Value::Number(m)) => match (n.as_f64(), m.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        },
        (Value::Number(n), Value::String(s)) | (Value::String(s), Value::Number(n)) => {
            match (n.as_f64(), s.trim().parse::<f64>()) {
                (Some(x), Ok(y)) => x == y,
                _ => false,
            }
        }
        (Value::Bool(flag), Value::String(s)) | (Value::String(s), Value::Bool(flag)) => {
            s.eq_ignore_ascii_case(if *flag { "true" } else { "false" })
        }
        _ => false,
    }
}
