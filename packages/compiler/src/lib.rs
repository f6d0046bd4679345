#![deny(clippy::all)]

/**
 * Shadow Scope Compiler
 *
 * Component-scoped CSS: selector rewriting for emulated Shadow DOM
 * encapsulation and local keyframes renaming.
 */

// Core modules
pub mod chars;
pub mod config;
pub mod error;
pub mod keyframes;
pub mod shadow_css;

// Parser modules
pub mod css;
pub mod selector;

// Re-exports
pub use config::ScopeOptions;
pub use error::{Result, ShadowCssError};
pub use keyframes::{scoped_keyframes_name, AnimationTable};
pub use shadow_css::{
    rewrite_selector, scope_selector_list, ScopeContext, ScopedParts, ShadowCss, ShimSummary,
};

/// Scope a stylesheet with options resolved from JSON, the CLI or Node.
/// Fails before any rewriting when no scope can be determined.
pub fn scope_css(css_text: &str, options: ScopeOptions) -> Result<String> {
    let context = options.into_context()?;
    Ok(ShadowCss::new(context).shim_css_text(css_text))
}
