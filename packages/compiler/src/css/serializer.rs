/**
 * Stylesheet Serializer
 *
 * Prints a (possibly rewritten) stylesheet AST back to CSS text. Node
 * values are emitted exactly as stored.
 */
use super::ast::{AtRule, Declaration, Node, Rule, Stylesheet};

/// Serialize a stylesheet to CSS text
pub fn stringify(sheet: &Stylesheet) -> String {
    let mut out = String::new();
    emit_nodes(&sheet.nodes, &mut out);
    out.push_str(&sheet.after);
    out
}

/// Serialize a single node, including its leading whitespace
pub fn stringify_node(node: &Node) -> String {
    let mut out = String::new();
    emit_node(node, &mut out);
    out
}

fn emit_nodes(nodes: &[Node], out: &mut String) {
    for node in nodes {
        emit_node(node, out);
    }
}

fn emit_node(node: &Node, out: &mut String) {
    match node {
        Node::Rule(rule) => emit_rule(rule, out),
        Node::AtRule(at_rule) => emit_at_rule(at_rule, out),
        Node::Declaration(decl) => emit_declaration(decl, out),
        Node::Comment(comment) => {
            out.push_str(&comment.before);
            out.push_str(&comment.text);
        }
        Node::Raw(raw) => {
            out.push_str(&raw.before);
            out.push_str(&raw.text);
            if raw.semicolon {
                out.push(';');
            }
        }
    }
}

fn emit_block(nodes: &[Node], after: &str, closed: bool, out: &mut String) {
    out.push('{');
    emit_nodes(nodes, out);
    out.push_str(after);
    if closed {
        out.push('}');
    }
}

fn emit_rule(rule: &Rule, out: &mut String) {
    out.push_str(&rule.before);
    out.push_str(&rule.selector);
    out.push_str(&rule.between);
    emit_block(&rule.nodes, &rule.after, rule.closed, out);
}

fn emit_at_rule(at_rule: &AtRule, out: &mut String) {
    out.push_str(&at_rule.before);
    out.push('@');
    out.push_str(&at_rule.name);
    out.push_str(&at_rule.after_name);
    out.push_str(&at_rule.params);
    out.push_str(&at_rule.between);
    if let Some(nodes) = &at_rule.nodes {
        emit_block(nodes, &at_rule.after, at_rule.closed, out);
    } else if at_rule.semicolon {
        out.push(';');
    }
}

fn emit_declaration(decl: &Declaration, out: &mut String) {
    out.push_str(&decl.before);
    out.push_str(&decl.prop);
    out.push_str(&decl.between);
    out.push_str(&decl.value);
    out.push_str(&decl.after_value);
    if decl.semicolon {
        out.push(';');
    }
}
