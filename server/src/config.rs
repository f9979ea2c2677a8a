//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_HOST_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_SITE_ROOT: &str = "client/dist";

/// Typed host settings with defaults for local development.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Bind address for the host itself.
    pub addr: String,
    /// Base URL of the external artifact API, without a trailing slash.
    pub backend_url: String,
    /// Directory holding the built client bundle.
    pub site_root: PathBuf,
}

impl HostConfig {
    /// Build config from process environment variables.
    ///
    /// Optional: `HOST_ADDR`, `BACKEND_URL`, `SITE_ROOT`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an injected variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr =
            non_empty(lookup("HOST_ADDR")).unwrap_or_else(|| DEFAULT_HOST_ADDR.to_owned());
        let backend_url = non_empty(lookup("BACKEND_URL"))
            .map_or_else(|| DEFAULT_BACKEND_URL.to_owned(), |url| {
                url.trim_end_matches('/').to_owned()
            });
        let site_root = non_empty(lookup("SITE_ROOT"))
            .map_or_else(|| PathBuf::from(DEFAULT_SITE_ROOT), PathBuf::from);

        Self {
            addr,
            backend_url,
            site_root,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
}
