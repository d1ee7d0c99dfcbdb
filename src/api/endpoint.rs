//! Backend endpoint resolution
//!
//! Turns the configured base URL into an API origin. Credentials embedded
//! as `user:password@host` are pulled out of the URL and sent as an HTTP
//! Basic `Authorization` header instead.

use reqwest::{RequestBuilder, Url};
use std::fmt;

use super::error::{ApiError, ApiResult};

/// HTTP Basic credentials taken from the base URL
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Resolved API origin plus optional Basic credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoint {
    base_url: String,
    credentials: Option<BasicCredentials>,
}

impl ApiEndpoint {
    /// Parse a configured base URL
    ///
    /// Without embedded credentials the URL is used verbatim (minus a
    /// trailing slash). With `user:password@` both parts are
    /// percent-decoded and removed from the origin.
    pub fn parse(raw: &str) -> ApiResult<Self> {
        let trimmed = raw.trim();
        let invalid = |reason: String| ApiError::InvalidBaseUrl {
            url: trimmed.to_string(),
            reason,
        };

        let mut url = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;

        let password = url.password().map(str::to_string);
        let credentials = match password {
            Some(password) if !url.username().is_empty() && !password.is_empty() => {
                Some(BasicCredentials {
                    username: percent_decode(url.username()),
                    password: percent_decode(&password),
                })
            }
            _ => None,
        };

        let base_url = if credentials.is_some() {
            url.set_password(None)
                .and_then(|_| url.set_username(""))
                .map_err(|_| invalid("cannot strip credentials".to_string()))?;
            url.as_str().trim_end_matches('/').to_string()
        } else {
            trimmed.trim_end_matches('/').to_string()
        };

        Ok(Self {
            base_url,
            credentials,
        })
    }

    /// API origin without credentials
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> Option<&BasicCredentials> {
        self.credentials.as_ref()
    }

    /// Absolute URL for an API path such as `/api/trending`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the Basic header when credentials are configured
    pub fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.credentials {
            Some(creds) => request.basic_auth(&creds.username, Some(&creds.password)),
            None => request,
        }
    }
}

fn percent_decode(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}
