/**
 * Selector AST
 *
 * Fragments produced by the selector lexer. Rendering every fragment of a
 * sequence in order reproduces the text it was scanned from.
 */
use serde::Serialize;
use std::fmt;

/// Fragment kinds, used where only the classification matters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FragmentKind {
    Identifier,
    Universal,
    Id,
    Class,
    Attribute,
    PseudoClass,
    PseudoElement,
    Combinator,
    Whitespace,
    String,
    Comment,
    Raw,
}

/// Functional or plain pseudo selector: `:hover`, `::slotted(.a)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pseudo {
    /// Number of leading colons as written
    pub colons: usize,
    pub name: String,
    /// Content between the parentheses, tokenized as selectors
    pub arguments: Option<Vec<Fragment>>,
    /// False when the argument list ran to the end of input without `)`
    pub closed: bool,
}

impl Pseudo {
    pub fn new(colons: usize, name: String) -> Self {
        Pseudo {
            colons,
            name,
            arguments: None,
            closed: true,
        }
    }

    pub fn with_arguments(mut self, arguments: Vec<Fragment>, closed: bool) -> Self {
        self.arguments = Some(arguments);
        self.closed = closed;
        self
    }

    /// Case-insensitive name check
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Argument fragments with surrounding whitespace and comments removed
    pub fn trimmed_arguments(&self) -> &[Fragment] {
        match &self.arguments {
            Some(args) => trim_fragments(args),
            None => &[],
        }
    }
}

impl fmt::Display for Pseudo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.colons {
            f.write_str(":")?;
        }
        f.write_str(&self.name)?;
        if let Some(args) = &self.arguments {
            f.write_str("(")?;
            for fragment in args {
                write!(f, "{}", fragment)?;
            }
            if self.closed {
                f.write_str(")")?;
            }
        }
        Ok(())
    }
}

/// Atomic lexical unit of a selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Fragment {
    /// Type selector: `div`
    Identifier { name: String },
    /// `*`
    Universal,
    /// `#name`
    Id { name: String },
    /// `.name`
    Class { name: String },
    /// `[...]`, kept as written
    Attribute { text: String },
    PseudoClass(Pseudo),
    PseudoElement(Pseudo),
    /// `>`, `+` or `~` with the surrounding whitespace
    Combinator { text: String },
    Whitespace { text: String },
    /// Quoted run including its quotes
    String { text: String },
    Comment { text: String },
    /// Anything the lexer could not classify
    Raw { text: String },
}

impl Fragment {
    pub fn kind(&self) -> FragmentKind {
        match self {
            Fragment::Identifier { .. } => FragmentKind::Identifier,
            Fragment::Universal => FragmentKind::Universal,
            Fragment::Id { .. } => FragmentKind::Id,
            Fragment::Class { .. } => FragmentKind::Class,
            Fragment::Attribute { .. } => FragmentKind::Attribute,
            Fragment::PseudoClass(_) => FragmentKind::PseudoClass,
            Fragment::PseudoElement(_) => FragmentKind::PseudoElement,
            Fragment::Combinator { .. } => FragmentKind::Combinator,
            Fragment::Whitespace { .. } => FragmentKind::Whitespace,
            Fragment::String { .. } => FragmentKind::String,
            Fragment::Comment { .. } => FragmentKind::Comment,
            Fragment::Raw { .. } => FragmentKind::Raw,
        }
    }

    /// Bare name of identifier, class, id and pseudo fragments
    pub fn name(&self) -> Option<&str> {
        match self {
            Fragment::Identifier { name } | Fragment::Id { name } | Fragment::Class { name } => {
                Some(name)
            }
            Fragment::PseudoClass(pseudo) | Fragment::PseudoElement(pseudo) => Some(&pseudo.name),
            _ => None,
        }
    }

    pub fn arguments(&self) -> Option<&[Fragment]> {
        match self {
            Fragment::PseudoClass(pseudo) | Fragment::PseudoElement(pseudo) => {
                pseudo.arguments.as_deref()
            }
            _ => None,
        }
    }

    /// Pseudo selector of either flavour, when this fragment is one
    pub fn pseudo(&self) -> Option<&Pseudo> {
        match self {
            Fragment::PseudoClass(pseudo) | Fragment::PseudoElement(pseudo) => Some(pseudo),
            _ => None,
        }
    }

    /// Combinators and whitespace always separate compound parts; comments
    /// only do where they touch one of those (see `segment`)
    pub fn is_separator(&self) -> bool {
        matches!(self, Fragment::Combinator { .. } | Fragment::Whitespace { .. })
    }

    /// Type or universal selector
    pub fn is_type(&self) -> bool {
        matches!(self, Fragment::Identifier { .. } | Fragment::Universal)
    }

    /// Fragments that receive the element scope token
    pub fn is_scopable(&self) -> bool {
        matches!(
            self,
            Fragment::Identifier { .. }
                | Fragment::Universal
                | Fragment::Id { .. }
                | Fragment::Class { .. }
                | Fragment::Attribute { .. }
        )
    }

    /// Stray bracket or an argument list that never closed
    pub fn is_unbalanced(&self) -> bool {
        match self {
            Fragment::Raw { text } => matches!(text.as_str(), "[" | "]" | "(" | ")"),
            Fragment::PseudoClass(pseudo) | Fragment::PseudoElement(pseudo) => !pseudo.closed,
            _ => false,
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::Identifier { name } => f.write_str(name),
            Fragment::Universal => f.write_str("*"),
            Fragment::Id { name } => write!(f, "#{}", name),
            Fragment::Class { name } => write!(f, ".{}", name),
            Fragment::PseudoClass(pseudo) | Fragment::PseudoElement(pseudo) => {
                write!(f, "{}", pseudo)
            }
            Fragment::Attribute { text }
            | Fragment::Combinator { text }
            | Fragment::Whitespace { text }
            | Fragment::String { text }
            | Fragment::Comment { text }
            | Fragment::Raw { text } => f.write_str(text),
        }
    }
}

/// Render a fragment sequence back to selector text
pub fn render(fragments: &[Fragment]) -> String {
    let mut out = String::new();
    render_into(fragments, &mut out);
    out
}

pub fn render_into(fragments: &[Fragment], out: &mut String) {
    use std::fmt::Write;
    for fragment in fragments {
        // Writing into a String cannot fail
        let _ = write!(out, "{}", fragment);
    }
}

/// Strip leading and trailing separators
pub fn trim_fragments(fragments: &[Fragment]) -> &[Fragment] {
    let start = fragments
        .iter()
        .position(|f| !matches!(f, Fragment::Whitespace { .. } | Fragment::Comment { .. }))
        .unwrap_or(fragments.len());
    let end = fragments
        .iter()
        .rposition(|f| !matches!(f, Fragment::Whitespace { .. } | Fragment::Comment { .. }))
        .map(|i| i + 1)
        .unwrap_or(start);
    &fragments[start..end.max(start)]
}
