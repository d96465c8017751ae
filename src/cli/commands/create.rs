//! Create command implementation.
//!
//! `ridgepole create <NAME>` lays down a local template skeleton: a
//! directory named after the template containing a `ridgepole.json`
//! metadata seed.

use std::fs;
use std::path::PathBuf;

use crate::cli::args::CreateArgs;
use crate::error::Result;
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};

/// File name of the template metadata seed.
pub const METADATA_FILE: &str = "ridgepole.json";

/// The create command implementation.
pub struct CreateCommand {
    args: CreateArgs,
}

impl CreateCommand {
    /// Create a new create command.
    pub fn new(args: CreateArgs) -> Self {
        Self { args }
    }

    fn template_dir(&self) -> Result<PathBuf> {
        let base = match &self.args.path {
            Some(path) => path.clone(),
            None => std::env::current_dir()?,
        };
        Ok(base.join(&self.args.name))
    }
}

impl Command for CreateCommand {
    fn execute(&self, out: &mut Output) -> Result<CommandResult> {
        let dir = self.template_dir()?;

        out.println(&format!(
            "Creating the template \"{}\" at {}",
            self.args.name,
            dir.display()
        ));

        fs::create_dir_all(&dir)?;
        fs::write(dir.join(METADATA_FILE), "{}\n")?;

        out.success(&format!("Created template \"{}\"", self.args.name));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{OutputMode, RidgepoleTheme};
    use tempfile::TempDir;

    fn quiet_output() -> Output {
        Output::new(OutputMode::Quiet, RidgepoleTheme::plain())
    }

    #[test]
    fn creates_directory_with_metadata_seed() {
        let temp = TempDir::new().unwrap();
        let cmd = CreateCommand::new(CreateArgs {
            name: "simple-website".into(),
            path: Some(temp.path().to_path_buf()),
        });

        let result = cmd.execute(&mut quiet_output()).unwrap();
        assert!(result.success);

        let seed = temp.path().join("simple-website").join(METADATA_FILE);
        assert_eq!(fs::read_to_string(seed).unwrap(), "{}\n");
    }

    #[test]
    fn create_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let args = CreateArgs {
            name: "again".into(),
            path: Some(temp.path().to_path_buf()),
        };

        CreateCommand::new(args.clone())
            .execute(&mut quiet_output())
            .unwrap();
        CreateCommand::new(args)
            .execute(&mut quiet_output())
            .unwrap();

        assert!(temp.path().join("again").join(METADATA_FILE).exists());
    }
}
