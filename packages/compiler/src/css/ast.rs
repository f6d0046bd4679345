/**
 * Stylesheet AST
 *
 * Generic, lossless CSS tree. Every node keeps the raw text around it
 * (`before`, `between`, `after`) so printing an untouched tree gives back
 * the parsed source byte for byte.
 */
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// `keyframes` and its vendor-prefixed variants
static KEYFRAMES_NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bkeyframes$").unwrap());

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stylesheet {
    pub nodes: Vec<Node>,
    /// Whitespace after the last node
    pub after: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Node {
    Rule(Rule),
    AtRule(AtRule),
    Declaration(Declaration),
    Comment(Comment),
    Raw(Raw),
}

/// Style rule: `selector { ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub before: String,
    pub selector: String,
    /// Whitespace between the selector and `{`
    pub between: String,
    pub nodes: Vec<Node>,
    /// Whitespace before `}`
    pub after: String,
    /// False when input ended before the closing brace
    pub closed: bool,
}

/// At-rule: `@name params;` or `@name params { ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AtRule {
    pub before: String,
    pub name: String,
    pub after_name: String,
    pub params: String,
    pub between: String,
    /// Child nodes when the at-rule has a block
    pub nodes: Option<Vec<Node>>,
    pub after: String,
    pub closed: bool,
    pub semicolon: bool,
}

impl AtRule {
    pub fn is_keyframes(&self) -> bool {
        KEYFRAMES_NAME_RE.is_match(&self.name)
    }
}

/// Declaration: `prop: value;`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    pub before: String,
    pub prop: String,
    /// Colon with its surrounding whitespace
    pub between: String,
    pub value: String,
    /// Whitespace between the value and `;`
    pub after_value: String,
    pub semicolon: bool,
}

impl Declaration {
    /// Property name with any vendor prefix removed, lowercased
    pub fn unprefixed_prop(&self) -> String {
        let prop = self.prop.to_ascii_lowercase();
        if let Some(rest) = prop.strip_prefix('-') {
            if let Some(idx) = rest.find('-') {
                if !rest.starts_with('-') {
                    return rest[idx + 1..].to_string();
                }
            }
        }
        prop
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub before: String,
    /// Full comment text including `/*` and `*/`
    pub text: String,
}

/// Statement the parser could not classify, kept verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Raw {
    pub before: String,
    pub text: String,
    pub semicolon: bool,
}
