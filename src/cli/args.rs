//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Ridgepole - Local cache manager for GitHub project templates.
#[derive(Debug, Parser)]
#[command(name = "ridgepole")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Cache root directory (overrides the platform data directory)
    #[arg(long, global = true, env = "RIDGEPOLE_ROOT", value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold a project from a template, fetching it if necessary
    #[command(visible_alias = "gen")]
    Generate(GenerateArgs),

    /// List all locally cached templates
    #[command(visible_aliases = ["ls", "show"])]
    List(ListArgs),

    /// Remove all locally cached templates
    #[command(visible_aliases = ["gc", "cleanup"])]
    Clean,

    /// Create a local template skeleton
    Create(CreateArgs),

    /// Print detailed build information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `generate` command.
#[derive(Debug, Clone, clap::Args)]
pub struct GenerateArgs {
    /// Template repository as <OWNER>/<REPO>, e.g. "Weburz/nuxt-base"
    #[arg(value_name = "OWNER/REPO")]
    pub template: String,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `create` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CreateArgs {
    /// Name to assign to the new template
    pub name: String,

    /// Directory to create the template under (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub path: Option<PathBuf>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
