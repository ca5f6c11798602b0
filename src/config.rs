//! Client configuration for the Dropbox API.

use std::env;

use crate::error::{DropboxError, Result};

/// Base URL for Dropbox API v2 RPC endpoints.
pub const DROPBOX_API_BASE: &str = "https://api.dropboxapi.com/2";

/// Environment variable holding the API access token.
pub const ACCESS_TOKEN_VAR: &str = "DROPBOX_ACCESS_TOKEN";

/// Default upper bound on pages fetched by a single paginated query.
pub const DEFAULT_MAX_PAGES: u32 = 1000;

/// Configuration for a [`DropboxClient`](crate::DropboxClient).
///
/// The access token and base URL are fixed at construction time; the client
/// never mutates them afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    access_token: String,
    base_url: String,
    max_pages: u32,
}

impl Config {
    /// Create a configuration with the given access token and defaults for
    /// everything else.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: DROPBOX_API_BASE.to_string(),
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    /// Read the access token from the `DROPBOX_ACCESS_TOKEN` environment
    /// variable.
    pub fn from_env() -> Result<Self> {
        match env::var(ACCESS_TOKEN_VAR) {
            Ok(token) if !token.is_empty() => Ok(Self::new(token)),
            _ => Err(DropboxError::MissingEnvVar(ACCESS_TOKEN_VAR.to_string())),
        }
    }

    /// Override the API base URL. Trailing slashes are stripped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the pagination page bound.
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn max_pages(&self) -> u32 {
        self.max_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new("token");
        assert_eq!(config.access_token(), "token");
        assert_eq!(config.base_url(), DROPBOX_API_BASE);
        assert_eq!(config.max_pages(), DEFAULT_MAX_PAGES);
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let config = Config::new("token").with_base_url("http://127.0.0.1:8080/");
        assert_eq!(config.base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_with_max_pages() {
        let config = Config::new("token").with_max_pages(5);
        assert_eq!(config.max_pages(), 5);
    }
}
