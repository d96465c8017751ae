//! Command implementations.

pub mod clean;
pub mod completions;
pub mod create;
pub mod dispatcher;
pub mod generate;
pub mod list;
pub mod version;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
