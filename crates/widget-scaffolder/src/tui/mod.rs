//! Inline status output using cliclack (Charm-style)
//!
//! This module is optional and only available when the `tui` feature is enabled.

#[cfg(feature = "tui")]
mod create;
#[cfg(feature = "tui")]
mod title;

#[cfg(feature = "tui")]
pub use create::{run, CreateArgs};
#[cfg(feature = "tui")]
pub use title::render_title;
