/**
 * Stylesheet Parser
 *
 * Tolerant CSS parser producing the lossless AST in `ast.rs`. It never
 * fails: statements it cannot classify become `Raw` nodes and unclosed
 * blocks are closed at end of input.
 */
use super::ast::{AtRule, Comment, Declaration, Node, Raw, Rule, Stylesheet};
use crate::chars;

/// Parse CSS source text into a stylesheet
pub fn parse_stylesheet(text: &str) -> Stylesheet {
    let mut parser = Parser::new(text);
    let block = parser.parse_block(false);
    Stylesheet {
        nodes: block.nodes,
        after: block.after,
    }
}

/// What stopped a statement scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Terminator {
    OpenBrace,
    Semicolon,
    CloseBrace,
    Eof,
}

struct Block {
    nodes: Vec<Node>,
    after: String,
    closed: bool,
}

struct Parser<'a> {
    input: &'a str,
    index: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Parser { input, index: 0 }
    }

    fn at_end(&self) -> bool {
        self.index >= self.input.len()
    }

    fn peek(&self) -> char {
        self.input[self.index..].chars().next().unwrap_or(chars::EOF)
    }

    fn advance(&mut self) {
        if let Some(ch) = self.input[self.index..].chars().next() {
            self.index += ch.len_utf8();
        }
    }

    fn consume_whitespace(&mut self) -> String {
        let start = self.index;
        while !self.at_end() && chars::is_whitespace(self.peek()) {
            self.advance();
        }
        self.input[start..self.index].to_string()
    }

    fn parse_block(&mut self, nested: bool) -> Block {
        let mut nodes = Vec::new();

        loop {
            let before = self.consume_whitespace();
            if self.at_end() {
                return Block {
                    nodes,
                    after: before,
                    closed: false,
                };
            }

            match self.peek() {
                chars::RBRACE if nested => {
                    self.advance();
                    return Block {
                        nodes,
                        after: before,
                        closed: true,
                    };
                }
                chars::RBRACE => {
                    // stray closing brace at the top level
                    self.advance();
                    nodes.push(Node::Raw(Raw {
                        before,
                        text: chars::RBRACE.to_string(),
                        semicolon: false,
                    }));
                }
                chars::SEMICOLON => {
                    self.advance();
                    nodes.push(Node::Raw(Raw {
                        before,
                        text: String::new(),
                        semicolon: true,
                    }));
                }
                chars::AT => nodes.push(self.parse_at_rule(before)),
                _ if chars::starts_comment(self.input, self.index) => {
                    nodes.push(self.parse_comment(before))
                }
                _ => nodes.push(self.parse_statement(before)),
            }
        }
    }

    fn parse_comment(&mut self, before: String) -> Node {
        let start = self.index;
        self.index = chars::comment_end(self.input, start);
        Node::Comment(Comment {
            before,
            text: self.input[start..self.index].to_string(),
        })
    }

    fn parse_at_rule(&mut self, before: String) -> Node {
        self.advance(); // @
        let name_start = self.index;
        while !self.at_end() && chars::is_identifier_part(self.peek()) {
            self.advance();
        }
        let name = self.input[name_start..self.index].to_string();

        let prelude_start = self.index;
        let (end, terminator) = scan_statement_end(self.input, prelude_start);
        let prelude = &self.input[prelude_start..end];
        let trimmed_end = prelude.trim_end();
        let params = trimmed_end.trim_start();
        let after_name = trimmed_end[..trimmed_end.len() - params.len()].to_string();
        let mut between = prelude[trimmed_end.len()..].to_string();

        let mut at_rule = AtRule {
            before,
            name,
            after_name,
            params: params.to_string(),
            between: String::new(),
            nodes: None,
            after: String::new(),
            closed: false,
            semicolon: false,
        };

        match terminator {
            Terminator::OpenBrace => {
                self.index = end + 1;
                let block = self.parse_block(true);
                at_rule.nodes = Some(block.nodes);
                at_rule.after = block.after;
                at_rule.closed = block.closed;
            }
            Terminator::Semicolon => {
                self.index = end + 1;
                at_rule.semicolon = true;
            }
            Terminator::CloseBrace | Terminator::Eof => {
                // trailing whitespace belongs to the enclosing block
                self.index = prelude_start + trimmed_end.len();
                between.clear();
            }
        }
        at_rule.between = between;

        Node::AtRule(at_rule)
    }

    /// Style rule, declaration or raw statement
    fn parse_statement(&mut self, before: String) -> Node {
        let start = self.index;
        let (end, terminator) = if is_custom_property(&self.input[start..]) {
            scan_custom_property_end(self.input, start)
        } else {
            scan_statement_end(self.input, start)
        };
        let text = &self.input[start..end];

        if terminator == Terminator::OpenBrace {
            let selector = text.trim_end();
            let between = text[selector.len()..].to_string();
            self.index = end + 1;
            let block = self.parse_block(true);
            return Node::Rule(Rule {
                before,
                selector: selector.to_string(),
                between,
                nodes: block.nodes,
                after: block.after,
                closed: block.closed,
            });
        }

        let semicolon = terminator == Terminator::Semicolon;
        let content = text.trim_end();
        let trailing = &text[content.len()..];
        self.index = if semicolon {
            end + 1
        } else {
            start + content.len()
        };
        let after_value = if semicolon {
            trailing.to_string()
        } else {
            String::new()
        };

        match find_top_level_colon(content) {
            Some(colon) => {
                let prop = content[..colon].trim_end();
                let value_part = &content[colon + 1..];
                let value = value_part.trim_start();
                let between = format!(
                    "{}:{}",
                    &content[prop.len()..colon],
                    &value_part[..value_part.len() - value.len()]
                );
                Node::Declaration(Declaration {
                    before,
                    prop: prop.to_string(),
                    between,
                    value: value.to_string(),
                    after_value,
                    semicolon,
                })
            }
            None => Node::Raw(Raw {
                before,
                text: format!("{}{}", content, after_value),
                semicolon,
            }),
        }
    }
}

/// `--name:` opens a custom property, whose value may hold `{}` blocks
fn is_custom_property(text: &str) -> bool {
    let Some(rest) = text.strip_prefix("--") else {
        return false;
    };
    let name_len = rest
        .find(|c: char| !chars::is_identifier_part(c))
        .unwrap_or(rest.len());
    rest[name_len..].trim_start().starts_with(chars::COLON)
}

/// Find where the statement starting at `from` ends. Strings and comments
/// are skipped; `;` inside parentheses or brackets does not end it, braces
/// always do.
fn scan_statement_end(input: &str, from: usize) -> (usize, Terminator) {
    scan_statement(input, from, false)
}

/// Like `scan_statement_end`, but balanced braces are part of the value
fn scan_custom_property_end(input: &str, from: usize) -> (usize, Terminator) {
    scan_statement(input, from, true)
}

fn scan_statement(input: &str, from: usize, nest_braces: bool) -> (usize, Terminator) {
    let mut depth = 0usize;
    let mut braces = 0usize;
    let mut quote: Option<char> = None;
    let mut iter = input[from..].char_indices().peekable();

    while let Some((i, ch)) = iter.next() {
        if ch == chars::BACKSLASH {
            iter.next();
            continue;
        }
        if let Some(q) = quote {
            if ch == q || chars::is_new_line(ch) {
                quote = None;
            }
            continue;
        }
        match ch {
            chars::SQ | chars::DQ => quote = Some(ch),
            chars::SLASH if chars::starts_comment(input, from + i) => {
                let resume = chars::comment_end(input, from + i);
                if resume == input.len() {
                    return (input.len(), Terminator::Eof);
                }
                while matches!(iter.peek(), Some((j, _)) if from + *j < resume) {
                    iter.next();
                }
            }
            chars::LPAREN | chars::LBRACKET => depth += 1,
            chars::RPAREN | chars::RBRACKET => depth = depth.saturating_sub(1),
            chars::LBRACE if nest_braces => braces += 1,
            chars::RBRACE if braces > 0 => braces -= 1,
            chars::LBRACE => return (from + i, Terminator::OpenBrace),
            chars::RBRACE => return (from + i, Terminator::CloseBrace),
            chars::SEMICOLON if depth == 0 && braces == 0 => {
                return (from + i, Terminator::Semicolon);
            }
            _ => {}
        }
    }

    (input.len(), Terminator::Eof)
}

/// First `:` outside strings, parentheses and brackets
fn find_top_level_colon(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut iter = text.char_indices();

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
            chars::LPAREN | chars::LBRACKET => depth += 1,
            chars::RPAREN | chars::RBRACKET => depth = depth.saturating_sub(1),
            chars::COLON if depth == 0 => return Some(i),
            _ => {}
        }
    }

    None
}
