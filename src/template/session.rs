//! Scaffold orchestration.
//!
//! A [`ScaffoldSession`] composes the identifier resolver, cache store,
//! fetcher and extractor into the single resolve → check cache → fetch →
//! extract pipeline. A session value is the unresolved state; calling
//! [`ScaffoldSession::scaffold`] consumes it, so a session can never run
//! twice — callers needing a retry construct a new one.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::template::extractor::extract_archive;
use crate::template::fetcher::ArchiveFetcher;
use crate::template::store::TemplateStore;
use crate::template::TemplateId;

/// Terminal state of a successful scaffold.
#[derive(Debug)]
pub enum ScaffoldOutcome {
    /// The template was already cached; no network access occurred.
    CacheHit { path: PathBuf },
    /// The template was fetched and extracted.
    Fetched { path: PathBuf },
}

impl ScaffoldOutcome {
    /// The local directory holding the template.
    pub fn path(&self) -> &Path {
        match self {
            Self::CacheHit { path } | Self::Fetched { path } => path,
        }
    }

    /// Whether the cache-hit short-circuit was taken.
    pub fn was_cached(&self) -> bool {
        matches!(self, Self::CacheHit { .. })
    }
}

/// One scaffold invocation over a store and a fetcher.
pub struct ScaffoldSession<'a> {
    store: &'a TemplateStore,
    fetcher: &'a ArchiveFetcher,
    refresh: bool,
}

impl<'a> ScaffoldSession<'a> {
    /// Create a session. The store and fetcher outlive it and can be
    /// shared across sessions.
    pub fn new(store: &'a TemplateStore, fetcher: &'a ArchiveFetcher) -> Self {
        Self {
            store,
            fetcher,
            refresh: false,
        }
    }

    /// Force a re-fetch even when the template is already cached.
    pub fn refresh(mut self, refresh: bool) -> Self {
        self.refresh = refresh;
        self
    }

    /// Resolve `raw`, then either hit the cache or fetch and extract.
    ///
    /// Performs at most one fetch and one extraction. The downloaded
    /// archive lives only across the fetch → extract handoff and is
    /// deleted on every exit path.
    pub fn scaffold(self, raw: &str) -> Result<ScaffoldOutcome> {
        let id = TemplateId::parse(raw)?;

        if !self.refresh && self.store.exists(&id) {
            let path = self.store.path_for(&id);
            tracing::debug!("Template {} found locally at {}", id, path.display());
            return Ok(ScaffoldOutcome::CacheHit { path });
        }

        tracing::debug!("Template {} not cached, fetching", id);
        let archive = self.fetcher.fetch(&id)?;
        let path = extract_archive(&archive, self.store.root())?;

        Ok(ScaffoldOutcome::Fetched { path })
    }
}
