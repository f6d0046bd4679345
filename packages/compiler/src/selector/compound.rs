/**
 * Compound Parts
 *
 * Groups a flat fragment sequence into compound parts separated by
 * combinators, whitespace and free-standing comments.
 */
use super::ast::{Fragment, Pseudo};
use smallvec::SmallVec;

/// Maximal run of fragments with no separator between them, e.g. `div.foo#bar`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompoundPart<'a> {
    pub fragments: &'a [Fragment],
}

/// Explicit escape out of (`global`) or into (`local`) the component scope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escape<'a> {
    Global(&'a Pseudo),
    Local(&'a Pseudo),
}

impl<'a> CompoundPart<'a> {
    pub fn leading(&self) -> Option<&'a Fragment> {
        self.fragments.first()
    }

    /// `::global(...)` / `::local(...)` leading the part.
    /// The single-colon spelling used by CSS modules is accepted as well.
    pub fn escape(&self) -> Option<Escape<'a>> {
        let pseudo = self.leading()?.pseudo()?;
        pseudo.arguments.as_ref()?;
        if pseudo.is("global") {
            Some(Escape::Global(pseudo))
        } else if pseudo.is("local") {
            Some(Escape::Local(pseudo))
        } else {
            None
        }
    }

    /// The fragments that follow the leading one
    pub fn rest(&self) -> &'a [Fragment] {
        self.fragments.get(1..).unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Part(CompoundPart<'a>),
    Separator(&'a Fragment),
}

impl<'a> Segment<'a> {
    pub fn as_part(&self) -> Option<&CompoundPart<'a>> {
        match self {
            Segment::Part(part) => Some(part),
            Segment::Separator(_) => None,
        }
    }
}

pub type Segments<'a> = SmallVec<[Segment<'a>; 8]>;

/// Split fragments into alternating compound parts and separators
pub fn segment(fragments: &[Fragment]) -> Segments<'_> {
    let mut segments = Segments::new();
    let mut part_start: Option<usize> = None;

    for (i, fragment) in fragments.iter().enumerate() {
        if separates(fragments, i) {
            if let Some(start) = part_start.take() {
                segments.push(Segment::Part(CompoundPart {
                    fragments: &fragments[start..i],
                }));
            }
            segments.push(Segment::Separator(fragment));
        } else if part_start.is_none() {
            part_start = Some(i);
        }
    }

    if let Some(start) = part_start {
        segments.push(Segment::Part(CompoundPart {
            fragments: &fragments[start..],
        }));
    }

    segments
}

/// A comment squeezed between two compound fragments (`.a/**/.b`) belongs
/// to the compound; anywhere else it separates like whitespace.
fn separates(fragments: &[Fragment], index: usize) -> bool {
    match &fragments[index] {
        Fragment::Comment { .. } => {
            let joins = |fragment: Option<&Fragment>| match fragment {
                Some(Fragment::Comment { .. }) | None => false,
                Some(f) => !f.is_separator(),
            };
            let before = index.checked_sub(1).and_then(|i| fragments.get(i));
            !(joins(before) && joins(fragments.get(index + 1)))
        }
        fragment => fragment.is_separator(),
    }
}

/// Input the rewriter should pass through untouched: no compound part at
/// all, unbalanced brackets, two combinators in a row or a trailing combinator.
pub fn is_malformed(segments: &[Segment<'_>]) -> bool {
    if !segments.iter().any(|s| s.as_part().is_some()) {
        return true;
    }

    let mut pending_combinator = false;
    for segment in segments {
        match segment {
            Segment::Part(part) => {
                if part.fragments.iter().any(Fragment::is_unbalanced) {
                    return true;
                }
                pending_combinator = false;
            }
            Segment::Separator(Fragment::Combinator { .. }) => {
                if pending_combinator {
                    return true;
                }
                pending_combinator = true;
            }
            Segment::Separator(_) => {}
        }
    }

    pending_combinator
}
