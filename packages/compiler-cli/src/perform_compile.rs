//! Perform Compile
//!
//! Input expansion, parallel scoping of stylesheets and output writing.

use anyhow::Context;
use rayon::prelude::*;
use shadow_scope_compiler::{ScopeOptions, ShadowCss};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One scoped stylesheet; `source` is `None` for standard input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledStylesheet {
    pub source: Option<PathBuf>,
    pub css: String,
}

/// Expand glob patterns to files. A pattern matching nothing is kept as a
/// literal path so the read error names it.
pub fn expand_inputs(patterns: &[String]) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let entries =
            glob::glob(pattern).with_context(|| format!("invalid glob pattern `{}`", pattern))?;
        let before = files.len();
        for entry in entries {
            let path = entry?;
            if path.is_file() && !files.contains(&path) {
                files.push(path);
            }
        }
        if files.len() == before {
            files.push(PathBuf::from(pattern));
        }
    }

    Ok(files)
}

fn shadow_css(options: &ScopeOptions) -> anyhow::Result<ShadowCss> {
    let context = options
        .clone()
        .into_context()
        .context("cannot scope stylesheets")?;
    Ok(ShadowCss::new(context))
}

/// Scope CSS text that did not come from a file
pub fn compile_source(css: &str, options: &ScopeOptions) -> anyhow::Result<CompiledStylesheet> {
    Ok(CompiledStylesheet {
        source: None,
        css: shadow_css(options)?.shim_css_text(css),
    })
}

/// Scope every file, one rayon task per stylesheet
pub fn compile_files(
    files: &[PathBuf],
    options: &ScopeOptions,
) -> anyhow::Result<Vec<CompiledStylesheet>> {
    let shadow_css = shadow_css(options)?;
    info!(files = files.len(), scope = shadow_css.context().scope(), "scoping stylesheets");

    files
        .par_iter()
        .map(|path| {
            let css = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            debug!(path = %path.display(), bytes = css.len(), "scoping stylesheet");
            Ok(CompiledStylesheet {
                source: Some(path.clone()),
                css: shadow_css.shim_css_text(&css),
            })
        })
        .collect()
}

/// Write results into `out_dir` (keeping file names) or to `out`
pub fn write_outputs<W: Write>(
    outputs: &[CompiledStylesheet],
    out_dir: Option<&Path>,
    out: &mut W,
) -> anyhow::Result<()> {
    let Some(dir) = out_dir else {
        for output in outputs {
            out.write_all(output.css.as_bytes())?;
        }
        return Ok(());
    };

    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    for output in outputs {
        let file_name = output
            .source
            .as_deref()
            .and_then(Path::file_name)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("stdin.css"));
        let target = dir.join(file_name);
        fs::write(&target, &output.css)
            .with_context(|| format!("failed to write {}", target.display()))?;
        debug!(path = %target.display(), "wrote stylesheet");
    }
    Ok(())
}
