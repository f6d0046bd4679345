//! Shadow CSS
//!
//! CSS scoping for component style encapsulation
//!
//! Selectors are rewritten so they only match elements carrying the
//! component's scope attribute, and the Shadow DOM boundary selectors
//! (`:host`, `:host-context()`, `::slotted()`) are expanded into plain
//! selectors against the host attribute. Locally declared `@keyframes` are
//! renamed together with the animations referring to them.

use crate::chars;
use crate::css::{parse_stylesheet, stringify, visit_stylesheet, Rule, Stylesheet, VisitorMut};
use crate::error::{Result, ShadowCssError};
use crate::keyframes::{rewrite_animations, AnimationTable};
use crate::selector::ast::{render_into, Fragment, Pseudo};
use crate::selector::compound::{is_malformed, segment, CompoundPart, Escape, Segment};
use crate::selector::lexer::tokenize;
use bitflags::bitflags;
use smallvec::SmallVec;
use tracing::{debug, trace};

const SLOT_SELECTOR: &str = "slot[slotted]";

bitflags! {
    /// Which compound parts of a selector receive the element token
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ScopedParts: u8 {
        const FIRST = 1 << 0;
        const LAST = 1 << 1;
        /// Every part between the first and the last
        const INTERIOR = 1 << 2;
    }
}

impl Default for ScopedParts {
    fn default() -> Self {
        ScopedParts::FIRST | ScopedParts::LAST
    }
}

/// Resolved configuration for one rewrite pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeContext {
    scope: String,
    element_token: String,
    host_token: String,
    scoped_parts: ScopedParts,
}

impl ScopeContext {
    /// Context with the default tokens `[scope]` and `[scope-host]`.
    /// An empty scope is a configuration error.
    pub fn new(scope: impl Into<String>) -> Result<Self> {
        let scope = scope.into();
        if scope.trim().is_empty() {
            return Err(ShadowCssError::MissingScope);
        }
        Ok(ScopeContext {
            element_token: default_element_token(&scope),
            host_token: default_host_token(&scope),
            scope,
            scoped_parts: ScopedParts::default(),
        })
    }

    pub fn with_element_token<F>(mut self, token: F) -> Self
    where
        F: Fn(&str) -> String,
    {
        self.element_token = token(&self.scope);
        self
    }

    pub fn with_host_token<F>(mut self, token: F) -> Self
    where
        F: Fn(&str) -> String,
    {
        self.host_token = token(&self.scope);
        self
    }

    /// Replace `:host` by a literal, e.g. the component's tag name
    pub fn with_component_token(mut self, component: impl Into<String>) -> Self {
        self.host_token = component.into();
        self
    }

    pub fn with_scoped_parts(mut self, parts: ScopedParts) -> Self {
        self.scoped_parts = parts;
        self
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn element_token(&self) -> &str {
        &self.element_token
    }

    pub fn host_token(&self) -> &str {
        &self.host_token
    }

    pub fn scoped_parts(&self) -> ScopedParts {
        self.scoped_parts
    }
}

pub fn default_element_token(scope: &str) -> String {
    format!("[{}]", scope)
}

pub fn default_host_token(scope: &str) -> String {
    format!("[{}-host]", scope)
}

/// Token function that substitutes `{scope}` in a template
pub fn token_template(template: impl Into<String>) -> impl Fn(&str) -> String {
    let template = template.into();
    move |scope: &str| template.replace("{scope}", scope)
}

/// Stylesheet-level driver
#[derive(Debug, Clone)]
pub struct ShadowCss {
    context: ScopeContext,
}

/// What one `shim_stylesheet` call changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShimSummary {
    pub rules: usize,
    pub animations: AnimationTable,
}

impl ShadowCss {
    pub fn new(context: ScopeContext) -> Self {
        ShadowCss { context }
    }

    pub fn context(&self) -> &ScopeContext {
        &self.context
    }

    /// Scope a whole stylesheet given as text
    pub fn shim_css_text(&self, css_text: &str) -> String {
        let mut sheet = parse_stylesheet(css_text);
        self.shim_stylesheet(&mut sheet);
        stringify(&sheet)
    }

    /// Scope an already parsed stylesheet in place
    pub fn shim_stylesheet(&self, sheet: &mut Stylesheet) -> ShimSummary {
        let mut scoper = SelectorScoper {
            context: &self.context,
            rules: 0,
        };
        visit_stylesheet(&mut scoper, sheet);
        let rules = scoper.rules;

        // keyframe selectors were skipped above, so renaming can run last
        let animations = rewrite_animations(sheet, self.context.scope());

        debug!(
            scope = self.context.scope(),
            rules,
            keyframes = animations.len(),
            "scoped stylesheet"
        );

        ShimSummary { rules, animations }
    }
}

struct SelectorScoper<'a> {
    context: &'a ScopeContext,
    rules: usize,
}

impl VisitorMut for SelectorScoper<'_> {
    fn visit_rule(&mut self, rule: &mut Rule, in_keyframes: bool) {
        if in_keyframes {
            return;
        }
        rule.selector = scope_selector_list(&rule.selector, self.context);
        self.rules += 1;
    }
}

/// Scope every selector of a comma-separated list independently
pub fn scope_selector_list(list: &str, ctx: &ScopeContext) -> String {
    split_on_top_level_commas(list)
        .into_iter()
        .map(|selector| {
            let core = selector.trim();
            if core.is_empty() {
                return selector.to_string();
            }
            let start = selector.len() - selector.trim_start().len();
            let end = start + core.len();
            format!(
                "{}{}{}",
                &selector[..start],
                rewrite_selector(core, ctx),
                &selector[end..]
            )
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Split on commas outside parentheses, brackets, strings and comments
pub fn split_on_top_level_commas(text: &str) -> Vec<&str> {
    let mut result = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut prev = 0;
    let mut iter = text.char_indices().peekable();

    while let Some((i, ch)) = iter.next() {
        if ch == chars::BACKSLASH {
            iter.next();
            continue;
        }
        if let Some(q) = quote {
            if ch == q {
                quote = None;
            }
            continue;
        }
        match ch {
            chars::SQ | chars::DQ => quote = Some(ch),
            chars::SLASH if chars::starts_comment(text, i) => {
                let resume = chars::comment_end(text, i);
                while matches!(iter.peek(), Some((j, _)) if *j < resume) {
                    iter.next();
                }
            }
            chars::LPAREN | chars::LBRACKET => depth += 1,
            chars::RPAREN | chars::RBRACKET => depth = depth.saturating_sub(1),
            chars::COMMA if depth == 0 => {
                result.push(&text[prev..i]);
                prev = i + 1;
            }
            _ => {}
        }
    }

    result.push(&text[prev..]);
    result
}

/// Scope a single selector (no top-level commas)
pub fn rewrite_selector(selector: &str, ctx: &ScopeContext) -> String {
    let fragments = tokenize(selector);
    let segments = segment(&fragments);
    if is_malformed(&segments) {
        trace!(selector, "leaving malformed selector unscoped");
        return selector.to_string();
    }

    let scopable: SmallVec<[usize; 8]> = segments
        .iter()
        .enumerate()
        .filter(|(_, s)| matches!(s.as_part(), Some(part) if part.escape().is_none()))
        .map(|(i, _)| i)
        .collect();
    let selected = select_parts(&scopable, ctx.scoped_parts());

    let mut out = String::with_capacity(selector.len() + 2 * ctx.element_token().len());
    for (i, segment) in segments.iter().enumerate() {
        match segment {
            Segment::Separator(fragment) => out.push_str(&fragment.to_string()),
            Segment::Part(part) => match part.escape() {
                Some(escape) => rewrite_escape(part, escape, ctx, &mut out),
                None => rewrite_part(part, selected.contains(&i), ctx, &mut out),
            },
        }
    }

    trace!(selector, scoped = %out, "rewrote selector");
    out
}

/// Segment indexes of the parts that receive the element token
fn select_parts(scopable: &[usize], parts: ScopedParts) -> SmallVec<[usize; 8]> {
    let last = scopable.len().saturating_sub(1);
    scopable
        .iter()
        .enumerate()
        .filter(|&(pos, _)| {
            (pos == 0 && parts.contains(ScopedParts::FIRST))
                || (pos == last && parts.contains(ScopedParts::LAST))
                || (pos != 0 && pos != last && parts.contains(ScopedParts::INTERIOR))
        })
        .map(|(_, &index)| index)
        .collect()
}

/// How one fragment of a compound part is rewritten
enum PartRule<'a> {
    Host(&'a Pseudo),
    HostContext(&'a Pseudo),
    Slotted(&'a Pseudo),
    Scopable,
    Verbatim,
}

fn part_rule(fragment: &Fragment) -> PartRule<'_> {
    match fragment {
        Fragment::PseudoClass(p) if p.is("host") => PartRule::Host(p),
        Fragment::PseudoClass(p) if p.is("host-context") => PartRule::HostContext(p),
        Fragment::PseudoElement(p) if p.is("slotted") && p.arguments.is_some() => {
            PartRule::Slotted(p)
        }
        Fragment::Identifier { .. }
        | Fragment::Universal
        | Fragment::Id { .. }
        | Fragment::Class { .. }
        | Fragment::Attribute { .. } => PartRule::Scopable,
        Fragment::PseudoClass(_)
        | Fragment::PseudoElement(_)
        | Fragment::Combinator { .. }
        | Fragment::Whitespace { .. }
        | Fragment::String { .. }
        | Fragment::Comment { .. }
        | Fragment::Raw { .. } => PartRule::Verbatim,
    }
}

fn is_boundary(rule: &PartRule<'_>) -> bool {
    matches!(
        rule,
        PartRule::Host(_) | PartRule::HostContext(_) | PartRule::Slotted(_)
    )
}

fn rewrite_part(part: &CompoundPart<'_>, selected: bool, ctx: &ScopeContext, out: &mut String) {
    let rules: SmallVec<[PartRule<'_>; 4]> = part.fragments.iter().map(part_rule).collect();

    // a part holding a boundary pseudo is replaced by its expansion and
    // never gets the element token
    let anchor = if !selected || rules.iter().any(is_boundary) {
        None
    } else {
        part.fragments
            .iter()
            .position(Fragment::is_type)
            .or_else(|| rules.iter().position(|r| matches!(r, PartRule::Scopable)))
    };

    for (i, (fragment, rule)) in part.fragments.iter().zip(rules.iter()).enumerate() {
        match rule {
            PartRule::Host(pseudo) => write_host(pseudo, ctx, out),
            PartRule::HostContext(pseudo) => write_host_context(pseudo, ctx, out),
            PartRule::Slotted(pseudo) => write_slotted(pseudo, ctx, out),
            PartRule::Scopable | PartRule::Verbatim => {
                out.push_str(&fragment.to_string());
                if anchor == Some(i) {
                    out.push_str(ctx.element_token());
                }
            }
        }
    }
}

/// `:host` and `:host(<refinement>)`. A leading type selector in the
/// refinement has to stay in front of the host attribute.
fn write_host(pseudo: &Pseudo, ctx: &ScopeContext, out: &mut String) {
    match pseudo.trimmed_arguments().split_first() {
        Some((first, rest)) if first.is_type() => {
            out.push_str(&first.to_string());
            out.push_str(ctx.host_token());
            render_into(rest, out);
        }
        _ => {
            out.push_str(ctx.host_token());
            render_into(pseudo.trimmed_arguments(), out);
        }
    }
}

/// `:host-context(<ancestor>)` becomes `<ancestor> <host>`
fn write_host_context(pseudo: &Pseudo, ctx: &ScopeContext, out: &mut String) {
    let args = pseudo.trimmed_arguments();
    if !args.is_empty() {
        render_into(args, out);
        out.push(chars::SPACE);
    }
    out.push_str(ctx.host_token());
}

/// `::slotted(<content>)` becomes `slot[slotted]<element> > <content>`
fn write_slotted(pseudo: &Pseudo, ctx: &ScopeContext, out: &mut String) {
    out.push_str(SLOT_SELECTOR);
    out.push_str(ctx.element_token());
    out.push_str(" > ");
    render_into(pseudo.trimmed_arguments(), out);
}

fn rewrite_escape(part: &CompoundPart<'_>, escape: Escape<'_>, ctx: &ScopeContext, out: &mut String) {
    let pseudo = match escape {
        Escape::Global(pseudo) => pseudo,
        Escape::Local(pseudo) => {
            out.push_str(ctx.host_token());
            out.push(chars::SPACE);
            pseudo
        }
    };
    render_into(pseudo.trimmed_arguments(), out);
    render_into(part.rest(), out);
}
