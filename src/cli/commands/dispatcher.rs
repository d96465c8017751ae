//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::Output;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, writing user-facing output through `out`.
    fn execute(&self, out: &mut Output) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    cache_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given cache root.
    pub fn new(cache_root: PathBuf) -> Self {
        Self { cache_root }
    }

    /// Get the cache root path.
    pub fn cache_root(&self) -> &Path {
        &self.cache_root
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, out: &mut Output) -> Result<CommandResult> {
        match &cli.command {
            Commands::Generate(args) => {
                let cmd = super::generate::GenerateCommand::new(&self.cache_root, args.clone());
                cmd.execute(out)
            }
            Commands::List(args) => {
                let cmd = super::list::ListCommand::new(&self.cache_root, args.clone());
                cmd.execute(out)
            }
            Commands::Clean => {
                let cmd = super::clean::CleanCommand::new(&self.cache_root);
                cmd.execute(out)
            }
            Commands::Create(args) => {
                let cmd = super::create::CreateCommand::new(args.clone());
                cmd.execute(out)
            }
            Commands::Version => {
                let cmd = super::version::VersionCommand::new();
                cmd.execute(out)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(out)
            }
        }
    }
}
