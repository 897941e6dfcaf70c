//! Per-case merge of overrides over file-level defaults.

use std::collections::BTreeMap;

use crate::definition::{ExpectedAssertion, ResponseType, TestCase, TestFile};
use crate::error::{DomainError, DomainResult};
use crate::method::HttpMethod;

/// A test case with every field resolved against its file's defaults.
///
/// The merge happens exactly once, before dispatch; the resolved case is
/// the only view of the definition the rest of the pipeline sees.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCase {
    /// Case name (guaranteed non-empty).
    pub name: String,
    /// Fully resolved request URL.
    pub url: String,
    /// Resolved HTTP method.
    pub method: HttpMethod,
    /// Resolved response type.
    pub response_type: ResponseType,
    /// GET query parameters.
    pub parameters: BTreeMap<String, String>,
    /// Path assertions to verify.
    pub expected: Vec<ExpectedAssertion>,
    /// Expected HTTP status code.
    pub expected_status: u16,
}

impl ResolvedCase {
    /// Merges a case over its file's defaults.
    ///
    /// Callers must filter out unnamed cases via
    /// [`TestCase::dispatch_name`] before resolving; this merge does not
    /// re-check the name.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] when no URL is available from either
    /// level, or when the method or response type does not parse. All of
    /// these mean "skip this case", never "abort the run".
    pub fn resolve(file: &TestFile, case: &TestCase) -> DomainResult<Self> {
        let name = case.dispatch_name().unwrap_or_default().to_string();

        let url = case
            .url
            .as_deref()
            .or(file.url.as_deref())
            .ok_or(DomainError::MissingUrl)?
            .to_string();

        let method = match case.method.as_deref().or(file.method.as_deref()) {
            Some(raw) => raw.parse::<HttpMethod>()?,
            None => HttpMethod::default(),
        };

        let response_type = match case
            .response_type
            .as_deref()
            .or(file.response_type.as_deref())
        {
            Some(raw) => raw.parse::<ResponseType>()?,
            None => ResponseType::default(),
        };

        Ok(Self {
            name,
            url,
            method,
            response_type,
            parameters: case.parameters.clone(),
            expected: case.expected.clone(),
            expected_status: case.httpresponse,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn file_with_defaults() -> TestFile {
        TestFile {
            url: Some("http://default.example.com/api".to_string()),
            method: Some("POST".to_string()),
            response_type: Some("JSON".to_string()),
            tests: Vec::new(),
        }
    }

    fn named_case(name: &str) -> TestCase {
        TestCase {
            name: Some(name.to_string()),
            ..TestCase::default()
        }
    }

    #[test]
    fn case_inherits_file_defaults() {
        let case = named_case("inherits");
        let resolved = ResolvedCase::resolve(&file_with_defaults(), &case).unwrap();

        assert_eq!(resolved.url, "http://default.example.com/api");
        assert_eq!(resolved.method, HttpMethod::Post);
        assert_eq!(resolved.response_type, ResponseType::Json);
        assert_eq!(resolved.expected_status, 200);
    }

    #[test]
    fn case_overrides_win_over_defaults() {
        let case = TestCase {
            url: Some("https://override.example.com/x".to_string()),
            method: Some("get".to_string()),
            response_type: Some("xml".to_string()),
            httpresponse: 404,
            ..named_case("overrides")
        };
        let resolved = ResolvedCase::resolve(&file_with_defaults(), &case).unwrap();

        assert_eq!(resolved.url, "https://override.example.com/x");
        assert_eq!(resolved.method, HttpMethod::Get);
        assert_eq!(resolved.response_type, ResponseType::Xml);
        assert_eq!(resolved.expected_status, 404);
    }

    #[test]
    fn absent_method_and_type_fall_back_to_get_xml() {
        let case = named_case("bare");
        let file = TestFile {
            url: Some("http://example.com".to_string()),
            ..TestFile::default()
        };
        let resolved = ResolvedCase::resolve(&file, &case).unwrap();

        assert_eq!(resolved.method, HttpMethod::Get);
        assert_eq!(resolved.response_type, ResponseType::Xml);
    }

    #[test]
    fn missing_url_everywhere_is_an_error() {
        let case = named_case("no-url");
        let err = ResolvedCase::resolve(&TestFile::default(), &case).unwrap_err();
        assert_eq!(err, DomainError::MissingUrl);
    }

    #[test]
    fn bad_method_is_an_error() {
        let case = TestCase {
            method: Some("BREW".to_string()),
            ..named_case("bad-method")
        };
        let err = ResolvedCase::resolve(&file_with_defaults(), &case).unwrap_err();
        assert_eq!(err, DomainError::UnsupportedMethod("BREW".to_string()));
    }
}
