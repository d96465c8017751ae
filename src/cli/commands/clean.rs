//! Clean command implementation.
//!
//! `ridgepole clean` removes every cached template, reporting each entry
//! before deletion so a partially failed run still shows what was removed.
//! An unreadable or absent cache root is an error; an empty one is not.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::template::TemplateStore;
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};

/// The clean command implementation.
pub struct CleanCommand {
    cache_root: PathBuf,
}

impl CleanCommand {
    /// Create a new clean command.
    pub fn new(cache_root: &Path) -> Self {
        Self {
            cache_root: cache_root.to_path_buf(),
        }
    }
}

impl Command for CleanCommand {
    fn execute(&self, out: &mut Output) -> Result<CommandResult> {
        let store = TemplateStore::new(&self.cache_root);

        let removed = store.clean(|id| {
            out.println(&format!("  {}", out.theme().dim.apply_to(id.to_string())));
        })?;

        if removed == 0 {
            out.println("No templates to remove");
        } else {
            out.success(&format!(
                "Removed {} template{}",
                removed,
                if removed == 1 { "" } else { "s" }
            ));
        }

        Ok(CommandResult::success())
    }
}
