//! Resolution service base URL.

use std::fmt;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// Base URL of the repository resolution service.
///
/// Any absolute `http` or `https` URL with a host is accepted; a path prefix
/// such as `/api` is kept in front of every endpoint.
///
/// # Example
///
/// ```
/// use libquality_core::ApiUrl;
///
/// let api = ApiUrl::new("http://localhost:3333/").unwrap();
/// assert_eq!(api.endpoint("repositories"), "http://localhost:3333/repositories");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiUrl(Url);

impl ApiUrl {
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let invalid = |reason: String| InvalidInputError::ApiUrl {
            value: s.to_string(),
            reason,
        };

        let url = Url::parse(s).map_err(|e| invalid(e.to_string()))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())).into());
        }
        if url.host_str().is_none() {
            return Err(invalid("must have a host".to_string()).into());
        }

        Ok(Self(url))
    }

    /// Returns the URL of an endpoint below this base.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}/{}", base, path.trim_start_matches('/'))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}
