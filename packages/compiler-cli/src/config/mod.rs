//! Configuration
//!
//! Option files and command-line overrides for the scoping commands.

pub mod options;

pub use options::{load_options, resolve_options};
