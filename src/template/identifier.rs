//! Template identifier parsing and cache path derivation.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};

use crate::error::{Result, RidgepoleError};

/// Accepted identifier shape: two non-empty tokens of letters, digits,
/// `-` and `_`, joined by a single `/`.
static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+/[A-Za-z0-9_-]+$").unwrap());

/// A parsed `<owner>/<repo>` template identifier.
///
/// Immutable once constructed: the only public constructors are
/// [`TemplateId::parse`] and the [`FromStr`] impl, both of which validate
/// the raw input.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TemplateId {
    owner: String,
    name: String,
}

impl TemplateId {
    /// Parse a raw `<owner>/<repo>` string.
    pub fn parse(raw: &str) -> Result<Self> {
        if !IDENTIFIER_RE.is_match(raw) {
            return Err(RidgepoleError::InvalidIdentifier { input: raw.into() });
        }

        // The regex guarantees exactly one '/' with non-empty sides.
        let (owner, name) = raw
            .split_once('/')
            .ok_or_else(|| RidgepoleError::InvalidIdentifier { input: raw.into() })?;

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    /// Construct from already-separated components.
    ///
    /// Used by the store when reconstructing identifiers from on-disk
    /// directory names; callers are responsible for the token shape.
    pub(crate) fn from_parts(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// The user or organisation that owns the template repository.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// The template repository name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Derive the canonical cache path for this identifier under `root`.
    ///
    /// Pure path arithmetic; `root` is never created or validated here.
    pub fn cache_path(&self, root: &Path) -> PathBuf {
        root.join(&self.owner).join(&self.name)
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for TemplateId {
    type Err = RidgepoleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for TemplateId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
