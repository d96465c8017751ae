//! List command implementation.
//!
//! `ridgepole list` enumerates the cached templates. A cache root that
//! does not exist yet is the same "no templates" success as an empty one.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::cli::args::ListArgs;
use crate::error::{Result, RidgepoleError};
use crate::template::{TemplateId, TemplateStore};
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    cache_root: PathBuf,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(cache_root: &Path, args: ListArgs) -> Self {
        Self {
            cache_root: cache_root.to_path_buf(),
            args,
        }
    }
}

impl Command for ListCommand {
    fn execute(&self, out: &mut Output) -> Result<CommandResult> {
        let store = TemplateStore::new(&self.cache_root);

        let templates: Vec<TemplateId> = match store.list() {
            Ok(templates) => templates,
            // No cache root yet means nothing has been fetched.
            Err(RidgepoleError::Io(err)) if err.kind() == ErrorKind::NotFound => Vec::new(),
            Err(err) => return Err(err),
        };

        if self.args.json {
            out.println(&serde_json::to_string_pretty(&templates).map_err(anyhow::Error::from)?);
            return Ok(CommandResult::success());
        }

        if templates.is_empty() {
            out.println("No templates found");
            return Ok(CommandResult::success());
        }

        out.println(&out.theme().format_header("Available templates:"));
        for template in &templates {
            out.println(&format!("  {}", template));
        }

        Ok(CommandResult::success())
    }
}
