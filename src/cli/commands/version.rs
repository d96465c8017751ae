//! Version command implementation.
//!
//! `ridgepole version` prints detailed build information; `--version`
//! (handled by clap) stays available for the short form.

use crate::error::Result;
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};

/// Build information baked in at compile time.
///
/// Commit and build date come from `RIDGEPOLE_COMMIT` and
/// `RIDGEPOLE_BUILD_DATE` when the release pipeline sets them.
#[derive(Debug)]
pub struct BuildInfo {
    pub version: &'static str,
    pub commit: &'static str,
    pub build_date: &'static str,
    pub platform: String,
}

impl BuildInfo {
    /// Collect the build information of the running binary.
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            commit: option_env!("RIDGEPOLE_COMMIT").unwrap_or("unknown"),
            build_date: option_env!("RIDGEPOLE_BUILD_DATE").unwrap_or("unknown"),
            platform: format!("{}/{}", std::env::consts::OS, std::env::consts::ARCH),
        }
    }
}

/// The version command implementation.
pub struct VersionCommand;

impl VersionCommand {
    /// Create a new version command.
    pub fn new() -> Self {
        Self
    }
}

impl Default for VersionCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for VersionCommand {
    fn execute(&self, out: &mut Output) -> Result<CommandResult> {
        let info = BuildInfo::current();

        out.println(&out.theme().format_header("Ridgepole Build Information"));
        out.println(&format!("Version:    {}", info.version));
        out.println(&format!("Commit:     {}", info.commit));
        out.println(&format!("Build Date: {}", info.build_date));
        out.println(&format!("Platform:   {}", info.platform));

        Ok(CommandResult::success())
    }
}
