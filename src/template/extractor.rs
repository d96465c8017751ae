//! Archive extraction.
//!
//! Unpacks a downloaded zipball into the cache, stripping the synthetic
//! top-level wrapper directory GitHub places around every snapshot
//! (`<owner>-<repo>-<ref>`). Extraction is staged: members are written into
//! a temporary sibling directory and renamed into place only on full
//! success, so the cache never contains a half-written entry.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use zip::ZipArchive;

use crate::error::{Result, RidgepoleError};

/// Extract `archive` into the cache under `root`.
///
/// The destination is derived from the archive's own wrapper directory, not
/// from the identifier the caller originally resolved; this keeps the cache
/// path canonical when a redirect or case difference changes the effective
/// owner or repository name. Returns the final destination directory.
pub fn extract_archive(archive: &Path, root: &Path) -> Result<PathBuf> {
    let file = File::open(archive)?;
    let mut zip = ZipArchive::new(file).map_err(|source| RidgepoleError::CorruptArchive {
        path: archive.to_path_buf(),
        source,
    })?;

    let wrapper = find_wrapper(&zip)?;
    let (owner, repo) = split_wrapper(&wrapper)?;
    tracing::debug!("Archive wrapper '{}' maps to {}/{}", wrapper, owner, repo);

    let owner_dir = root.join(&owner);
    let destination = owner_dir.join(&repo);
    fs::create_dir_all(&owner_dir)?;

    // Stage next to the destination so the final rename stays on one
    // filesystem.
    let staging = tempfile::Builder::new()
        .prefix(".ridgepole-stage-")
        .tempdir_in(&owner_dir)?;

    for index in 0..zip.len() {
        let mut member = zip
            .by_index(index)
            .map_err(|source| RidgepoleError::CorruptArchive {
                path: archive.to_path_buf(),
                source,
            })?;

        let entry_name = member.name().to_string();
        let safe_path = member
            .enclosed_name()
            .ok_or(RidgepoleError::PathEscape { entry: entry_name })?;

        let relative =
            safe_path
                .strip_prefix(&wrapper)
                .map_err(|_| RidgepoleError::UnexpectedLayout {
                    reason: format!(
                        "member '{}' is not under the top-level directory '{}'",
                        member.name(),
                        wrapper
                    ),
                })?;

        // The wrapper directory entry itself.
        if relative.as_os_str().is_empty() {
            continue;
        }

        let target = staging.path().join(relative);

        if member.is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut out = File::create(&target)?;
            io::copy(&mut member, &mut out)?;
        }
    }

    commit(staging, &destination)?;

    tracing::debug!("Extracted archive to {}", destination.display());
    Ok(destination)
}

/// Find the single top-level directory shared by every archive member.
fn find_wrapper<R: io::Read + io::Seek>(zip: &ZipArchive<R>) -> Result<String> {
    let mut wrapper: Option<&str> = None;

    for name in zip.file_names() {
        let Some((top, _)) = name.split_once('/') else {
            return Err(RidgepoleError::UnexpectedLayout {
                reason: format!("member '{}' is not inside a top-level directory", name),
            });
        };

        match wrapper {
            None => wrapper = Some(top),
            Some(seen) if seen == top => {}
            Some(seen) => {
                return Err(RidgepoleError::UnexpectedLayout {
                    reason: format!(
                        "members disagree on the top-level directory ('{}' vs '{}')",
                        seen, top
                    ),
                });
            }
        }
    }

    match wrapper {
        Some(w) => Ok(w.to_string()),
        None => Err(RidgepoleError::UnexpectedLayout {
            reason: "archive has no members".into(),
        }),
    }
}

/// Recover owner and repository from a `<owner>-<repo>-<ref>` wrapper name.
///
/// With three or more components the last one is the ref suffix and is
/// dropped; the middle components re-join to allow hyphenated repository
/// names. A hyphenated owner cannot be told apart from a hyphenated
/// repository here, so the first component is always taken as the owner.
fn split_wrapper(wrapper: &str) -> Result<(String, String)> {
    let parts: Vec<&str> = wrapper.split('-').collect();

    if parts.len() < 2 || parts.iter().any(|p| p.is_empty()) {
        return Err(RidgepoleError::UnexpectedLayout {
            reason: format!("top-level directory '{}' is not <owner>-<repo>-<ref>", wrapper),
        });
    }

    let owner = parts[0].to_string();
    let repo = if parts.len() == 2 {
        parts[1].to_string()
    } else {
        parts[1..parts.len() - 1].join("-")
    };

    Ok((owner, repo))
}

/// Rename the fully-populated staging directory into place, replacing any
/// pre-existing destination.
fn commit(staging: tempfile::TempDir, destination: &Path) -> Result<()> {
    let staged = staging.keep();

    if destination.exists() {
        if let Err(err) = fs::remove_dir_all(destination) {
            let _ = fs::remove_dir_all(&staged);
            return Err(err.into());
        }
    }

    if let Err(err) = fs::rename(&staged, destination) {
        let _ = fs::remove_dir_all(&staged);
        return Err(err.into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    /// Write a zip archive containing the given (name, content) members.
    /// Members with `None` content become directory entries.
    fn write_zip(members: &[(&str, Option<&str>)]) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut writer = ZipWriter::new(file.reopen().unwrap());
        let options = SimpleFileOptions::default();

        for (name, content) in members {
            match content {
                Some(bytes) => {
                    writer.start_file(*name, options).unwrap();
                    writer.write_all(bytes.as_bytes()).unwrap();
                }
                None => {
                    writer.add_directory(*name, options).unwrap();
                }
            }
        }

        writer.finish().unwrap();
        file
    }

    #[test]
    fn extracts_members_with_wrapper_stripped() {
        let archive = write_zip(&[
            ("acme-widgets-abcdef123/", None),
            ("acme-widgets-abcdef123/README.md", Some("# Widgets\n")),
            ("acme-widgets-abcdef123/src/", None),
            ("acme-widgets-abcdef123/src/main.rs", Some("fn main() {}\n")),
        ]);
        let root = TempDir::new().unwrap();

        let dest = extract_archive(archive.path(), root.path()).unwrap();

        assert_eq!(dest, root.path().join("acme").join("widgets"));
        assert_eq!(
            fs::read_to_string(dest.join("README.md")).unwrap(),
            "# Widgets\n"
        );
        assert_eq!(
            fs::read_to_string(dest.join("src/main.rs")).unwrap(),
            "fn main() {}\n"
        );
    }

    #[test]
    fn wrapper_directory_is_never_materialized() {
        let archive = write_zip(&[("acme-widgets-abcdef123/README.md", Some("hi"))]);
        let root = TempDir::new().unwrap();

        extract_archive(archive.path(), root.path()).unwrap();

        let mut found = Vec::new();
        let mut pending = vec![root.path().to_path_buf()];
        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(dir).unwrap() {
                let path = entry.unwrap().path();
                found.push(path.file_name().unwrap().to_string_lossy().to_string());
                if path.is_dir() {
                    pending.push(path);
                }
            }
        }
        assert!(!found.iter().any(|name| name == "acme-widgets-abcdef123"));
    }

    #[test]
    fn hyphenated_repo_names_keep_their_hyphens() {
        let archive = write_zip(&[("octo-hello-world-deadbeef/README.md", Some("hello"))]);
        let root = TempDir::new().unwrap();

        let dest = extract_archive(archive.path(), root.path()).unwrap();

        assert_eq!(dest, root.path().join("octo").join("hello-world"));
        assert!(dest.join("README.md").exists());
    }

    #[test]
    fn two_component_wrapper_is_accepted() {
        let archive = write_zip(&[("acme-widgets/file.txt", Some("x"))]);
        let root = TempDir::new().unwrap();

        let dest = extract_archive(archive.path(), root.path()).unwrap();
        assert_eq!(dest, root.path().join("acme").join("widgets"));
    }

    #[test]
    fn flat_archive_is_unexpected_layout() {
        let archive = write_zip(&[("README.md", Some("no wrapper"))]);
        let root = TempDir::new().unwrap();

        let err = extract_archive(archive.path(), root.path()).unwrap_err();
        assert!(matches!(err, RidgepoleError::UnexpectedLayout { .. }));
    }

    #[test]
    fn disagreeing_top_level_directories_are_unexpected_layout() {
        let archive = write_zip(&[
            ("acme-widgets-abc/README.md", Some("a")),
            ("other-stuff-def/README.md", Some("b")),
        ]);
        let root = TempDir::new().unwrap();

        let err = extract_archive(archive.path(), root.path()).unwrap_err();
        assert!(matches!(err, RidgepoleError::UnexpectedLayout { .. }));
    }

    #[test]
    fn wrapper_without_separator_is_unexpected_layout() {
        let archive = write_zip(&[("justonename/README.md", Some("a"))]);
        let root = TempDir::new().unwrap();

        let err = extract_archive(archive.path(), root.path()).unwrap_err();
        assert!(matches!(err, RidgepoleError::UnexpectedLayout { .. }));
    }

    #[test]
    fn traversal_member_is_path_escape_and_commits_nothing() {
        let archive = write_zip(&[
            ("acme-widgets-abc/README.md", Some("fine")),
            ("acme-widgets-abc/../../etc/passwd", Some("root:x")),
        ]);
        let root = TempDir::new().unwrap();

        let err = extract_archive(archive.path(), root.path()).unwrap_err();

        assert!(matches!(err, RidgepoleError::PathEscape { .. }));
        // Nothing committed, nothing escaped.
        assert!(!root.path().join("acme").join("widgets").exists());
        assert!(!root.path().join("etc").exists());
        assert!(!root.path().parent().unwrap().join("etc").exists());
    }

    #[test]
    fn corrupt_archive_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"this is not a zip archive").unwrap();
        let root = TempDir::new().unwrap();

        let err = extract_archive(file.path(), root.path()).unwrap_err();
        assert!(matches!(err, RidgepoleError::CorruptArchive { .. }));
    }

    #[test]
    fn re_extraction_replaces_previous_contents() {
        let root = TempDir::new().unwrap();

        let first = write_zip(&[
            ("acme-widgets-aaa/old.txt", Some("old")),
            ("acme-widgets-aaa/README.md", Some("v1")),
        ]);
        extract_archive(first.path(), root.path()).unwrap();

        let second = write_zip(&[("acme-widgets-bbb/README.md", Some("v2"))]);
        let dest = extract_archive(second.path(), root.path()).unwrap();

        assert_eq!(fs::read_to_string(dest.join("README.md")).unwrap(), "v2");
        assert!(!dest.join("old.txt").exists());
    }

    #[test]
    fn failed_extraction_leaves_no_staging_directory() {
        let archive = write_zip(&[("acme-widgets-abc/../../x", Some("escape"))]);
        let root = TempDir::new().unwrap();

        extract_archive(archive.path(), root.path()).unwrap_err();

        // The owner directory may exist, but no staging leftovers inside it.
        let owner_dir = root.path().join("acme");
        if owner_dir.exists() {
            let leftovers: Vec<_> = fs::read_dir(&owner_dir).unwrap().collect();
            assert!(leftovers.is_empty());
        }
    }

    #[test]
    fn split_wrapper_variants() {
        assert_eq!(
            split_wrapper("acme-widgets").unwrap(),
            ("acme".into(), "widgets".into())
        );
        assert_eq!(
            split_wrapper("acme-widgets-abcdef123").unwrap(),
            ("acme".into(), "widgets".into())
        );
        assert_eq!(
            split_wrapper("octo-hello-world-deadbeef").unwrap(),
            ("octo".into(), "hello-world".into())
        );
        assert!(split_wrapper("nodash").is_err());
        assert!(split_wrapper("double--dash").is_err());
    }
}
