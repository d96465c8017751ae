//! Ridgepole - Local cache manager for GitHub project templates.
//!
//! Ridgepole resolves a `<owner>/<repo>` identifier to a deterministic
//! local cache path, downloads a zipball of the repository when it is not
//! already cached, and extracts it with the archive's synthetic top-level
//! wrapper directory stripped away.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`template`] - Identifier resolution, fetching, extraction and the cache store
//! - [`ui`] - Terminal output, theme, and spinners
//!
//! # Example
//!
//! ```
//! use ridgepole::template::TemplateId;
//! use std::path::Path;
//!
//! let id = TemplateId::parse("acme/widgets").unwrap();
//! assert_eq!(id.owner(), "acme");
//! assert_eq!(
//!     id.cache_path(Path::new("/data/ridgepole")),
//!     Path::new("/data/ridgepole/acme/widgets")
//! );
//! ```

pub mod cli;
pub mod error;
pub mod template;
pub mod ui;

pub use error::{Result, RidgepoleError};
