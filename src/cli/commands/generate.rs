//! Generate command implementation.
//!
//! `ridgepole generate <OWNER>/<REPO>` resolves the identifier, checks the
//! cache, and on a miss downloads and extracts the template.

use std::path::{Path, PathBuf};

use crate::cli::args::GenerateArgs;
use crate::error::Result;
use crate::template::{ArchiveFetcher, ScaffoldOutcome, ScaffoldSession, TemplateStore};
use crate::ui::{Output, ProgressSpinner};

use super::dispatcher::{Command, CommandResult};

/// The generate command implementation.
pub struct GenerateCommand {
    cache_root: PathBuf,
    args: GenerateArgs,
}

impl GenerateCommand {
    /// Create a new generate command.
    pub fn new(cache_root: &Path, args: GenerateArgs) -> Self {
        Self {
            cache_root: cache_root.to_path_buf(),
            args,
        }
    }
}

impl Command for GenerateCommand {
    fn execute(&self, out: &mut Output) -> Result<CommandResult> {
        let store = TemplateStore::new(&self.cache_root);
        let fetcher = ArchiveFetcher::from_env();
        let session = ScaffoldSession::new(&store, &fetcher);

        out.detail(&format!("Cache root: {}", self.cache_root.display()));

        let mut spinner = if out.mode().shows_spinners() {
            ProgressSpinner::new(&format!("Fetching {}...", self.args.template))
        } else {
            ProgressSpinner::hidden()
        };

        let outcome = match session.scaffold(&self.args.template) {
            Ok(outcome) => {
                spinner.finish_clear();
                outcome
            }
            Err(err) => {
                spinner.finish_clear();
                return Err(err);
            }
        };

        match outcome {
            ScaffoldOutcome::CacheHit { path } => {
                out.success(&format!("Template found locally at {}", path.display()));
            }
            ScaffoldOutcome::Fetched { path } => {
                out.success(&format!("Template downloaded to {}", path.display()));
            }
        }

        Ok(CommandResult::success())
    }
}
