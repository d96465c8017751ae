//! Cache storage implementation.
//!
//! All operations are scoped to a single configured root directory; the
//! root is injected at construction so tests can run against isolated
//! temporary directories.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, RidgepoleError};
use crate::template::TemplateId;

/// Storage for cached templates, laid out as `<root>/<owner>/<name>`.
pub struct TemplateStore {
    root: PathBuf,
}

impl TemplateStore {
    /// Create a new store over `root`. The directory is not created here.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the cache root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The cache path for an identifier.
    pub fn path_for(&self, id: &TemplateId) -> PathBuf {
        id.cache_path(&self.root)
    }

    /// Whether a template is cached.
    ///
    /// An empty directory counts as cached; a real extraction can
    /// legitimately produce one.
    pub fn exists(&self, id: &TemplateId) -> bool {
        self.path_for(id).is_dir()
    }

    /// Enumerate cached templates, sorted by `owner/name`.
    ///
    /// Freshly computed on each call. Entries that are not directories at
    /// either level (or whose names are not valid UTF-8) are skipped; an
    /// unreadable root is an error.
    pub fn list(&self) -> Result<Vec<TemplateId>> {
        let mut templates = Vec::new();

        for owner_entry in fs::read_dir(&self.root)? {
            let owner_entry = owner_entry?;
            if !owner_entry.file_type()?.is_dir() {
                continue;
            }
            let Some(owner) = owner_entry.file_name().to_str().map(String::from) else {
                continue;
            };

            for name_entry in fs::read_dir(owner_entry.path())? {
                let name_entry = name_entry?;
                if !name_entry.file_type()?.is_dir() {
                    continue;
                }
                let Some(name) = name_entry.file_name().to_str().map(String::from) else {
                    continue;
                };

                templates.push(TemplateId::from_parts(owner.clone(), name));
            }
        }

        templates.sort();
        Ok(templates)
    }

    /// Remove every cached template under the root in a single pass.
    ///
    /// Each `owner/name` entry is handed to `report` before it is deleted,
    /// so a partially failed run still communicates what was removed.
    /// Fails fast on the first unremovable entry, leaving the remainder
    /// untouched; clean is not atomic. Stray files that are not cache
    /// entries are removed without being reported or counted. Returns the
    /// number of entries removed.
    pub fn clean(&self, mut report: impl FnMut(&TemplateId)) -> Result<usize> {
        let mut removed = 0;

        let mut owner_entries: Vec<_> =
            fs::read_dir(&self.root)?.collect::<std::io::Result<_>>()?;
        owner_entries.sort_by_key(|e| e.file_name());

        for owner_entry in owner_entries {
            let owner_path = owner_entry.path();

            if !owner_entry.file_type()?.is_dir() {
                fs::remove_file(&owner_path)?;
                continue;
            }

            let owner = owner_entry.file_name().to_string_lossy().into_owned();

            let mut name_entries: Vec<_> =
                fs::read_dir(&owner_path)?.collect::<std::io::Result<_>>()?;
            name_entries.sort_by_key(|e| e.file_name());

            for name_entry in name_entries {
                let name_path = name_entry.path();

                if !name_entry.file_type()?.is_dir() {
                    fs::remove_file(&name_path)?;
                    continue;
                }

                let id = TemplateId::from_parts(
                    owner.clone(),
                    name_entry.file_name().to_string_lossy().into_owned(),
                );

                report(&id);
                tracing::debug!("Removing cached template {}", id);

                fs::remove_dir_all(&name_path).map_err(|source| {
                    RidgepoleError::CleanFailed {
                        id: id.to_string(),
                        source,
                    }
                })?;
                removed += 1;
            }

            fs::remove_dir(&owner_path)?;
        }

        Ok(removed)
    }
}
