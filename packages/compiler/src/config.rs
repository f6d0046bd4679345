/**
 * Scope Options
 *
 * Externally resolved scoping configuration, as received from JSON option
 * files, the command line or the Node binding.
 */
use crate::error::{Result, ShadowCssError};
use crate::shadow_css::{token_template, ScopeContext, ScopedParts};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ELEMENT_TOKEN: &str = "[{scope}]";
pub const DEFAULT_HOST_TOKEN: &str = "[{scope}-host]";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScopeOptions {
    /// Scope identifier
    pub scope: Option<String>,
    /// Component name; replaces `:host` unless a host token is given
    pub component: Option<String>,
    /// Element token template, `{scope}` is substituted
    pub element_token: Option<String>,
    /// Host token template, `{scope}` is substituted
    pub host_token: Option<String>,
    /// Scope every compound part instead of the first and last ones
    pub scope_all_parts: bool,
}

impl ScopeOptions {
    /// Options naming only the component; the scope becomes `_<component>`
    pub fn for_component(component: impl Into<String>) -> Self {
        ScopeOptions {
            component: Some(component.into()),
            ..Default::default()
        }
    }

    /// An options object, or a bare string naming the component
    pub fn from_json(text: &str) -> Result<Self> {
        match serde_json::from_str(text)? {
            serde_json::Value::String(component) => Ok(Self::for_component(component)),
            value => Ok(serde_json::from_value(value)?),
        }
    }

    /// Values set in `other` take precedence
    pub fn merge(self, other: ScopeOptions) -> Self {
        ScopeOptions {
            scope: other.scope.or(self.scope),
            component: other.component.or(self.component),
            element_token: other.element_token.or(self.element_token),
            host_token: other.host_token.or(self.host_token),
            scope_all_parts: self.scope_all_parts || other.scope_all_parts,
        }
    }

    /// Scope identifier, falling back to `_<component>`
    pub fn resolved_scope(&self) -> Option<String> {
        let non_empty = |value: &Option<String>| value.clone().filter(|v| !v.trim().is_empty());
        non_empty(&self.scope).or_else(|| non_empty(&self.component).map(|c| format!("_{}", c)))
    }

    pub fn into_context(self) -> Result<ScopeContext> {
        let scope = self.resolved_scope().ok_or(ShadowCssError::MissingScope)?;
        let element_token = self
            .element_token
            .unwrap_or_else(|| DEFAULT_ELEMENT_TOKEN.to_string());

        let mut context = ScopeContext::new(scope)?.with_element_token(token_template(element_token));
        context = match (self.host_token, self.component) {
            (Some(host_token), _) => context.with_host_token(token_template(host_token)),
            (None, Some(component)) if !component.trim().is_empty() => {
                context.with_component_token(component)
            }
            (None, _) => context.with_host_token(token_template(DEFAULT_HOST_TOKEN)),
        };

        if self.scope_all_parts {
            context = context.with_scoped_parts(ScopedParts::all());
        }
        Ok(context)
    }
}
