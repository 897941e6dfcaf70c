//! Test-definition file model.
//!
//! A definition file is a JSON document declaring one base request plus an
//! ordered list of named test cases. Any field a case leaves unset falls
//! back to the file-level default.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DomainError, DomainResult};

/// A parsed test-definition file.
///
/// Unknown top-level fields are ignored; a file with no `tests` array
/// simply produces zero dispatches.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TestFile {
    /// Default request URL for every case in the file.
    pub url: Option<String>,
    /// Default HTTP method (GET when absent).
    pub method: Option<String>,
    /// Default response type (XML when absent).
    #[serde(rename = "responseType")]
    pub response_type: Option<String>,
    /// The ordered test cases declared by this file.
    #[serde(default)]
    pub tests: Vec<TestCase>,
}

impl TestFile {
    /// Parses a definition file from its JSON source.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error when the source is not
    /// valid JSON or does not match the definition shape. Callers treat
    /// this as "skip the file", never as a fatal condition.
    pub fn parse(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }
}

/// A single named test case inside a definition file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TestCase {
    /// Case name. A case with a missing or empty name is never dispatched.
    pub name: Option<String>,
    /// Per-case URL override.
    pub url: Option<String>,
    /// Per-case method override.
    pub method: Option<String>,
    /// Per-case response-type override.
    #[serde(rename = "responseType")]
    pub response_type: Option<String>,
    /// Query parameters, serialized into the query string for GET requests.
    #[serde(default)]
    pub parameters: BTreeMap<String, String>,
    /// Path assertions to evaluate against the parsed response body.
    #[serde(default)]
    pub expected: Vec<ExpectedAssertion>,
    /// Expected HTTP status code.
    #[serde(default = "default_status")]
    pub httpresponse: u16,
}

const fn default_status() -> u16 {
    200
}

impl TestCase {
    /// Returns the case name if it is present and non-empty.
    #[must_use]
    pub fn dispatch_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

/// One path assertion: a map from a body locator (`a.b[0].c`) to the value
/// expected at that location.
///
/// The file format writes one assertion per object; an object carrying
/// several entries is treated as one assertion per entry.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ExpectedAssertion(pub BTreeMap<String, Value>);

impl ExpectedAssertion {
    /// Iterates the `(path, expected value)` entries of this assertion.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(path, value)| (path.as_str(), value))
    }
}

/// Declared shape of a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResponseType {
    /// Parse the body as XML.
    #[default]
    Xml,
    /// Parse the body as JSON.
    Json,
}

impl ResponseType {
    /// Returns the type as its canonical upper-case string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xml => "XML",
            Self::Json => "JSON",
        }
    }
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ResponseType {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s.to_uppercase().as_str() {
            "XML" => Ok(Self::Xml),
            "JSON" => Ok(Self::Json),
            _ => Err(DomainError::UnsupportedResponseType(s.to_string())),
        }
    }
}
