//! Archive downloading.
//!
//! Fetches a repository snapshot from GitHub's zipball endpoint into a
//! temporary file. The returned [`TempPath`] deletes the file on drop, so
//! the archive is removed on every exit path once the caller is done with
//! it.

use std::io;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use tempfile::TempPath;

use crate::error::{Result, RidgepoleError};
use crate::template::TemplateId;

const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Environment variable overriding the archive endpoint base URL.
pub const BASE_URL_ENV: &str = "GITHUB_API_URL";

/// Downloads repository archives over HTTPS.
pub struct ArchiveFetcher {
    client: Client,
    base_url: String,
}

impl ArchiveFetcher {
    /// Create a fetcher against the default GitHub API endpoint.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a fetcher honouring the `GITHUB_API_URL` override.
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.is_empty() => Self::with_base_url(url),
            _ => Self::new(),
        }
    }

    /// Create a fetcher against a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            // GitHub rejects requests without a User-Agent header.
            client: Client::builder()
                .user_agent(concat!("ridgepole/", env!("CARGO_PKG_VERSION")))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
        }
    }

    /// Get the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The zipball URL for an identifier (default branch, no ref pinning).
    pub fn archive_url(&self, id: &TemplateId) -> String {
        format!(
            "{}/repos/{}/{}/zipball",
            self.base_url,
            id.owner(),
            id.name()
        )
    }

    /// Download the repository snapshot into a temporary file.
    ///
    /// Performs exactly one GET and creates exactly one temporary file per
    /// call. Ownership of the file transfers to the caller via the returned
    /// [`TempPath`]; dropping it deletes the archive.
    pub fn fetch(&self, id: &TemplateId) -> Result<TempPath> {
        let url = self.archive_url(id);
        tracing::debug!("Downloading {}", url);

        let mut response = self
            .client
            .get(&url)
            .send()
            .map_err(|source| RidgepoleError::Network {
                url: url.clone(),
                source,
            })?;

        if response.status() != StatusCode::OK {
            return Err(RidgepoleError::BadStatus {
                url,
                status: response.status(),
            });
        }

        let mut file = tempfile::Builder::new()
            .prefix("ridgepole-")
            .suffix(".zip")
            .tempfile()?;

        io::copy(&mut response, file.as_file_mut())?;

        tracing::debug!("Archive written to {}", file.path().display());
        Ok(file.into_temp_path())
    }
}

impl Default for ArchiveFetcher {
    fn default() -> Self {
        Self::new()
    }
}
