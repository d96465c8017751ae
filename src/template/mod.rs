//! Template caching system.
//!
//! This module implements the resolve → check cache → fetch → extract
//! pipeline: [`TemplateId`] parses identifiers and derives cache paths,
//! [`ArchiveFetcher`] downloads repository zipballs, [`extractor`] unpacks
//! them into the normalized `<root>/<owner>/<repo>` layout, and
//! [`TemplateStore`] enumerates and removes cached entries.
//! [`ScaffoldSession`] ties the pieces together for one invocation.

pub mod extractor;
pub mod fetcher;
pub mod identifier;
pub mod session;
pub mod store;

pub use extractor::extract_archive;
pub use fetcher::ArchiveFetcher;
pub use identifier::TemplateId;
pub use session::{ScaffoldOutcome, ScaffoldSession};
pub use store::TemplateStore;

/// Get the default cache root directory.
pub fn default_cache_root() -> std::path::PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("ridgepole")
}
