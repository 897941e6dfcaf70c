//! Verification outcomes.

use serde_json::Value;

use crate::definition::ResponseType;

/// One failed path assertion.
#[derive(Debug, Clone, PartialEq)]
pub struct AssertionFailure {
    /// The body locator that was checked.
    pub path: String,
    /// The value the definition expected there.
    pub expected: Value,
    /// The value actually resolved, or `None` when the path was absent.
    pub actual: Option<Value>,
}

impl AssertionFailure {
    fn describe(&self) -> String {
        let actual = self
            .actual
            .as_ref()
            .map_or_else(|| "nothing".to_string(), render);
        format!(
            "Incorrect value for {}: expected {}, got {}",
            self.path,
            render(&self.expected),
            actual
        )
    }
}

/// Strings render bare, everything else as JSON.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// The result of verifying one dispatched test case.
///
/// Exactly one outcome is produced per dispatched case; it is consumed
/// immediately by the reporter.
#[derive(Debug, Clone, PartialEq)]
pub enum VerificationOutcome {
    /// Status matched and every assertion held.
    Pass,
    /// The response status differed from the expected one. The body is
    /// never parsed when this happens.
    StatusMismatch {
        /// Status the definition expected.
        expected: u16,
        /// Status the server returned.
        actual: u16,
    },
    /// The body could not be parsed as the declared type.
    InvalidBody(ResponseType),
    /// One or more path assertions failed.
    AssertionFailures(Vec<AssertionFailure>),
}

impl VerificationOutcome {
    /// Returns true for a passing outcome.
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Human-readable failure message; `None` for a pass.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Pass => None,
            Self::StatusMismatch { expected, actual } => Some(format!(
                "Incorrect HTTP status code: expected {expected} but got {actual}"
            )),
            Self::InvalidBody(kind) => Some(format!("Invalid {kind}")),
            Self::AssertionFailures(failures) => Some(
                failures
                    .iter()
                    .map(AssertionFailure::describe)
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
        }
    }
}
