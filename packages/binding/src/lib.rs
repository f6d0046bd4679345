#![deny(clippy::all)]

use napi::bindgen_prelude::Either;
use napi_derive::napi;
use shadow_scope_compiler::{ScopeOptions, ShadowCss};

/// Options object accepted from JavaScript
#[napi(object)]
#[derive(Default)]
pub struct ScopeCssOptions {
    pub scope: Option<String>,
    pub component: Option<String>,
    pub element_token: Option<String>,
    pub host_token: Option<String>,
    pub scope_all_parts: Option<bool>,
}

impl From<ScopeCssOptions> for ScopeOptions {
    fn from(options: ScopeCssOptions) -> Self {
        ScopeOptions {
            scope: options.scope,
            component: options.component,
            element_token: options.element_token,
            host_token: options.host_token,
            scope_all_parts: options.scope_all_parts.unwrap_or(false),
        }
    }
}

/// A bare string names the component
fn resolve_options(options: Either<String, ScopeCssOptions>) -> ScopeOptions {
    match options {
        Either::A(component) => ScopeOptions::for_component(component),
        Either::B(options) => options.into(),
    }
}

fn to_napi_error(err: shadow_scope_compiler::ShadowCssError) -> napi::Error {
    napi::Error::new(napi::Status::InvalidArg, err.to_string())
}

/// Scope one stylesheet. Throws when no scope or component is given.
#[napi]
pub fn scope_css(css: String, options: Either<String, ScopeCssOptions>) -> napi::Result<String> {
    shadow_scope_compiler::scope_css(&css, resolve_options(options)).map_err(to_napi_error)
}

/// Reusable scoper for many stylesheets of the same component
#[napi]
pub struct ShadowScoper {
    shadow_css: ShadowCss,
}

#[napi]
impl ShadowScoper {
    #[napi(constructor)]
    pub fn new(options: Either<String, ScopeCssOptions>) -> napi::Result<Self> {
        let context = resolve_options(options)
            .into_context()
            .map_err(to_napi_error)?;
        Ok(ShadowScoper {
            shadow_css: ShadowCss::new(context),
        })
    }

    #[napi(getter)]
    pub fn scope(&self) -> String {
        self.shadow_css.context().scope().to_string()
    }

    #[napi]
    pub fn scope_css(&self, css: String) -> String {
        self.shadow_css.shim_css_text(&css)
    }
}
