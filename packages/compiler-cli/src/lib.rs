#![deny(clippy::all)]

/**
 * Shadow Scope CLI
 *
 * Command-line front end for component CSS scoping
 */
pub use shadow_scope_compiler as compiler;

// CLI-specific modules
pub mod config;
pub mod perform_compile;
pub mod version;
