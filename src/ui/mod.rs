//! Terminal output components.
//!
//! This module provides:
//! - [`Output`] - themed writer gated by [`OutputMode`]
//! - [`ProgressSpinner`] - spinner for the download/extract phase
//! - [`RidgepoleTheme`] - console styles with `NO_COLOR` and TTY detection

pub mod output;
pub mod spinner;
pub mod theme;

pub use output::{Output, OutputMode};
pub use spinner::ProgressSpinner;
pub use theme::{should_use_colors, RidgepoleTheme};
