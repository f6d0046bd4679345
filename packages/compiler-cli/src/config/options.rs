use anyhow::Context;
use shadow_scope_compiler::ScopeOptions;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read a JSON options file (`{ "scope": ..., "elementToken": ... }`)
pub fn load_options(path: &Path) -> anyhow::Result<ScopeOptions> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read options file {}", path.display()))?;
    let options = ScopeOptions::from_json(&content)
        .with_context(|| format!("failed to parse options file {}", path.display()))?;
    debug!(path = %path.display(), "loaded scope options");
    Ok(options)
}

/// Options from `file`, with every value set in `overrides` taking precedence
pub fn resolve_options(file: Option<&Path>, overrides: ScopeOptions) -> anyhow::Result<ScopeOptions> {
    let base = match file {
        Some(path) => load_options(path)?,
        None => ScopeOptions::default(),
    };
    Ok(base.merge(overrides))
}
