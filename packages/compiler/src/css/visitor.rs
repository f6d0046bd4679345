//! Stylesheet Visitor
//!
//! Mutable depth-first traversal over stylesheet nodes. Implementors
//! override only the callbacks they need.

use super::ast::{AtRule, Declaration, Node, Rule, Stylesheet};

pub trait VisitorMut {
    /// Style rule; `in_keyframes` is true for keyframe selectors such as `from` or `50%`
    fn visit_rule(&mut self, _rule: &mut Rule, _in_keyframes: bool) {}

    fn visit_at_rule(&mut self, _at_rule: &mut AtRule) {}

    fn visit_declaration(&mut self, _decl: &mut Declaration) {}
}

/// Visit every node of the stylesheet, parents before children
pub fn visit_stylesheet<V: VisitorMut + ?Sized>(visitor: &mut V, sheet: &mut Stylesheet) {
    visit_all(visitor, &mut sheet.nodes, false);
}

pub fn visit_all<V: VisitorMut + ?Sized>(visitor: &mut V, nodes: &mut [Node], in_keyframes: bool) {
    for node in nodes.iter_mut() {
        match node {
            Node::Rule(rule) => {
                visitor.visit_rule(rule, in_keyframes);
                visit_all(visitor, &mut rule.nodes, in_keyframes);
            }
            Node::AtRule(at_rule) => {
                visitor.visit_at_rule(at_rule);
                let nested_in_keyframes = in_keyframes || at_rule.is_keyframes();
                if let Some(children) = at_rule.nodes.as_mut() {
                    visit_all(visitor, children, nested_in_keyframes);
                }
            }
            Node::Declaration(decl) => visitor.visit_declaration(decl),
            Node::Comment(_) | Node::Raw(_) => {}
        }
    }
}
