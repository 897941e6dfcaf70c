//! Request descriptors: the transient, fully derived form of one dispatch.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use url::Url;

use crate::error::{DomainError, DomainResult};
use crate::method::HttpMethod;
use crate::resolved::ResolvedCase;

/// Configured hostname substitutions.
///
/// Overrides apply only to the connection target: scheme, port, and path
/// still derive from the URL as written in the test definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct HostOverrides(BTreeMap<String, String>);

impl HostOverrides {
    /// Creates an empty override table.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns the replacement for `host`, if one is configured.
    #[must_use]
    pub fn replacement(&self, host: &str) -> Option<&str> {
        self.0.get(host).map(String::as_str)
    }

    /// Returns true when no overrides are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for HostOverrides {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// URL scheme of a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scheme {
    /// Plaintext HTTP.
    #[default]
    Http,
    /// HTTP over TLS.
    Https,
}

impl Scheme {
    /// Default port when the URL does not carry an explicit one.
    #[must_use]
    pub const fn default_port(self) -> u16 {
        match self {
            Self::Http => 80,
            Self::Https => 443,
        }
    }

    /// Returns the scheme as its lower-case string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s.to_lowercase().as_str() {
            "http" => Ok(Self::Http),
            "https" => Ok(Self::Https),
            _ => Err(DomainError::UnsupportedScheme(s.to_string())),
        }
    }
}

/// Everything the HTTP client needs for one call.
///
/// Built once per dispatched case and dropped as soon as the call
/// completes. The query string of the URL as written is never preserved:
/// for GET the case `parameters` fully replace it, for other methods the
/// path is sent bare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// Transport scheme.
    pub scheme: Scheme,
    /// Connection target host, after any configured override.
    pub host: String,
    /// Connection port (explicit, or 80/443 by scheme).
    pub port: u16,
    /// URL path plus serialized query string, when any.
    pub path_and_query: String,
    /// HTTP method.
    pub method: HttpMethod,
}

impl RequestDescriptor {
    /// Derives the descriptor for a resolved case.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] when the URL does not parse, has no
    /// hostname, or uses a scheme other than http(s).
    pub fn build(case: &ResolvedCase, overrides: &HostOverrides) -> DomainResult<Self> {
        let url = Url::parse(&case.url)
            .map_err(|e| DomainError::InvalidUrl(format!("{e}: {}", case.url)))?;

        let scheme: Scheme = url.scheme().parse()?;

        let original_host = url
            .host_str()
            .ok_or_else(|| DomainError::InvalidUrl(format!("no host in {}", case.url)))?;
        let host = overrides
            .replacement(original_host)
            .unwrap_or(original_host)
            .to_string();

        let port = url.port().unwrap_or_else(|| scheme.default_port());

        let mut path_and_query = url.path().to_string();
        if case.method == HttpMethod::Get && !case.parameters.is_empty() {
            let query = serde_urlencoded::to_string(&case.parameters)
                .map_err(|e| DomainError::InvalidUrl(e.to_string()))?;
            path_and_query.push('?');
            path_and_query.push_str(&query);
        }

        Ok(Self {
            scheme,
            host,
            port,
            path_and_query,
            method: case.method,
        })
    }

    /// Rebuilds the URL to connect to, with the override applied.
    #[must_use]
    pub fn target_url(&self) -> String {
        format!(
            "{}://{}:{}{}",
            self.scheme, self.host, self.port, self.path_and_query
        )
    }
}
