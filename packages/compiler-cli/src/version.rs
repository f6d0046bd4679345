//! Version
//!
//! Version information for the CLI.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
