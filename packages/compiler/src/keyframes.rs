//! Keyframes
//!
//! Renames `@keyframes` declared in a stylesheet so they are local to one
//! component, then rewrites `animation` / `animation-name` values that
//! refer to them. Names never declared in the stylesheet are assumed to be
//! global and left alone.

use crate::chars;
use crate::css::{visit_stylesheet, AtRule, Declaration, Stylesheet, VisitorMut};
use indexmap::IndexMap;
use tracing::trace;

// Animation keywords that can never name the keyframes in a shorthand
const ANIMATION_KEYWORDS: &[&str] = &[
    // global values
    "inherit",
    "initial",
    "revert",
    "unset",
    // animation-direction
    "alternate",
    "alternate-reverse",
    "normal",
    "reverse",
    // animation-fill-mode
    "backwards",
    "both",
    "forwards",
    "none",
    // animation-play-state
    "paused",
    "running",
    // animation-timing-function
    "ease",
    "ease-in",
    "ease-in-out",
    "ease-out",
    "linear",
    "step-start",
    "step-end",
    // animation-iteration-count
    "infinite",
];

/// Original keyframes name to scoped name, for one stylesheet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimationTable {
    names: IndexMap<String, String>,
}

impl AnimationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, original: String, scoped: String) {
        self.names.insert(original, scoped);
    }

    pub fn get(&self, original: &str) -> Option<&str> {
        self.names.get(original).map(String::as_str)
    }

    pub fn contains(&self, original: &str) -> bool {
        self.names.contains_key(original)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Scoped keyframes name: the scope is appended directly when it already
/// starts with `_` or `-`, otherwise joined with `-`.
pub fn scoped_keyframes_name(name: &str, scope: &str) -> String {
    if scope.starts_with(chars::UNDERSCORE) || scope.starts_with(chars::MINUS) {
        format!("{}{}", name, scope)
    } else {
        format!("{}-{}", name, scope)
    }
}

/// Rename local keyframes and every animation reference to them.
///
/// All `@keyframes` are collected before any declaration is touched, so a
/// declaration may reference keyframes defined later in the stylesheet.
pub fn rewrite_animations(sheet: &mut Stylesheet, scope: &str) -> AnimationTable {
    let mut collector = KeyframesCollector {
        scope,
        table: AnimationTable::new(),
    };
    visit_stylesheet(&mut collector, sheet);
    let table = collector.table;

    if !table.is_empty() {
        let mut renamer = AnimationRenamer { table: &table };
        visit_stylesheet(&mut renamer, sheet);
    }

    table
}

struct KeyframesCollector<'a> {
    scope: &'a str,
    table: AnimationTable,
}

impl VisitorMut for KeyframesCollector<'_> {
    fn visit_at_rule(&mut self, at_rule: &mut AtRule) {
        if !at_rule.is_keyframes() || at_rule.params.is_empty() {
            return;
        }

        let (quote, name) = unquote(&at_rule.params);
        let scoped = scoped_keyframes_name(name, self.scope);
        let params = match quote {
            Some(q) => format!("{}{}{}", q, scoped, q),
            None => scoped.clone(),
        };
        trace!(name, scoped = %scoped, "renaming keyframes");
        self.table.insert(name.to_string(), scoped);
        at_rule.params = params;
    }
}

struct AnimationRenamer<'a> {
    table: &'a AnimationTable,
}

impl VisitorMut for AnimationRenamer<'_> {
    fn visit_declaration(&mut self, decl: &mut Declaration) {
        let rewritten = match decl.unprefixed_prop().as_str() {
            "animation-name" => rewrite_animation_names(&decl.value, self.table),
            "animation" => rewrite_animation_shorthand(&decl.value, self.table),
            _ => return,
        };
        if rewritten != decl.value {
            trace!(prop = %decl.prop, from = %decl.value, to = %rewritten, "rewrote animation");
            decl.value = rewritten;
        }
    }
}

/// Split a quoted name into its quote and content
fn unquote(text: &str) -> (Option<char>, &str) {
    match (text.chars().next(), text.chars().last()) {
        (Some(first), Some(last)) if chars::is_quote(first) && first == last && text.len() >= 2 => {
            (Some(first), &text[1..text.len() - 1])
        }
        _ => (None, text),
    }
}

/// Lexical pieces of a declaration value; concatenated they give the value back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueToken<'a> {
    Word(&'a str),
    Quoted(&'a str),
    Function(&'a str),
    Space(&'a str),
    Comment(&'a str),
    Comma,
    Other(&'a str),
}

impl<'a> ValueToken<'a> {
    fn text(&self) -> &'a str {
        match self {
            ValueToken::Word(t)
            | ValueToken::Quoted(t)
            | ValueToken::Function(t)
            | ValueToken::Space(t)
            | ValueToken::Comment(t)
            | ValueToken::Other(t) => t,
            ValueToken::Comma => ",",
        }
    }
}

fn tokenize_value(value: &str) -> Vec<ValueToken<'_>> {
    let mut tokens = Vec::new();
    let mut rest = value;

    while let Some(ch) = rest.chars().next() {
        let len = if chars::starts_comment(rest, 0) {
            let len = chars::comment_end(rest, 0);
            tokens.push(ValueToken::Comment(&rest[..len]));
            len
        } else if chars::is_whitespace(ch) {
            let len = rest
                .find(|c: char| !chars::is_whitespace(c))
                .unwrap_or(rest.len());
            tokens.push(ValueToken::Space(&rest[..len]));
            len
        } else if ch == chars::COMMA {
            tokens.push(ValueToken::Comma);
            1
        } else if chars::is_quote(ch) {
            let len = quoted_len(rest, ch);
            tokens.push(ValueToken::Quoted(&rest[..len]));
            len
        } else {
            let word_len = rest
                .char_indices()
                .find(|&(i, c)| {
                    chars::is_whitespace(c)
                        || c == chars::COMMA
                        || chars::is_quote(c)
                        || c == chars::LPAREN
                        || chars::starts_comment(rest, i)
                })
                .map_or(rest.len(), |(i, _)| i);
            if rest[word_len..].starts_with(chars::LPAREN) {
                let len = function_len(rest, word_len);
                tokens.push(ValueToken::Function(&rest[..len]));
                len
            } else if word_len == 0 {
                let len = ch.len_utf8();
                tokens.push(ValueToken::Other(&rest[..len]));
                len
            } else {
                tokens.push(ValueToken::Word(&rest[..word_len]));
                word_len
            }
        };
        rest = &rest[len..];
    }

    tokens
}

/// Length of the quoted string at the start of `text`, quotes included
fn quoted_len(text: &str, quote: char) -> usize {
    let mut iter = text.char_indices().skip(1);
    while let Some((i, ch)) = iter.next() {
        if ch == chars::BACKSLASH {
            iter.next();
        } else if ch == quote {
            return i + 1;
        }
    }
    text.len()
}

/// Length of `name(...)` where the parenthesis opens at `open`
fn function_len(text: &str, open: usize) -> usize {
    let mut depth = 0usize;
    for (i, ch) in text[open..].char_indices() {
        if ch == chars::LPAREN {
            depth += 1;
        } else if ch == chars::RPAREN {
            depth -= 1;
            if depth == 0 {
                return open + i + 1;
            }
        }
    }
    text.len()
}

/// Scoped replacement for a name token, if it names local keyframes
fn scoped_token(token: ValueToken<'_>, table: &AnimationTable) -> Option<String> {
    match token {
        ValueToken::Word(word) => table.get(word).map(str::to_string),
        ValueToken::Quoted(text) => {
            let (quote, name) = unquote(text);
            let q = quote?;
            table.get(name).map(|scoped| format!("{}{}{}", q, scoped, q))
        }
        _ => None,
    }
}

/// `animation-name`: every listed name that is local gets scoped
fn rewrite_animation_names(value: &str, table: &AnimationTable) -> String {
    tokenize_value(value)
        .into_iter()
        .map(|token| scoped_token(token, table).unwrap_or_else(|| token.text().to_string()))
        .collect()
}

/// `animation`: in each comma-separated entry the first token naming local
/// keyframes is scoped, wherever it sits in the entry (`1s spin` scopes
/// `spin` even though the name is not the leading token). Keywords are never
/// treated as names and comments are copied through.
fn rewrite_animation_shorthand(value: &str, table: &AnimationTable) -> String {
    let mut out = String::with_capacity(value.len());
    let mut renamed_in_entry = false;

    for token in tokenize_value(value) {
        match token {
            ValueToken::Comma => renamed_in_entry = false,
            ValueToken::Word(word) if ANIMATION_KEYWORDS.contains(&word) => {}
            _ if !renamed_in_entry => {
                if let Some(scoped) = scoped_token(token, table) {
                    out.push_str(&scoped);
                    renamed_in_entry = true;
                    continue;
                }
            }
            _ => {}
        }
        out.push_str(token.text());
    }

    out
}
