/**
 * Selector Lexer
 *
 * Splits selector text into typed fragments. Scanning never fails: input
 * that matches no rule becomes a one-character `Raw` fragment, so every
 * character of the input ends up in exactly one fragment.
 */
use super::ast::{Fragment, Pseudo};
use crate::chars;

/// Tokenize selector text into fragments
pub fn tokenize(text: &str) -> Vec<Fragment> {
    Scanner::new(text).scan()
}

/// Byte offset of the `close` character balancing an `open` that has
/// already been consumed before `from`. Quoted strings and escapes are
/// skipped so `[title="]"]` and `:is(a, "(")` scan correctly.
pub(crate) fn find_closing(input: &str, from: usize, open: char, close: char) -> Option<usize> {
    let mut depth = 1usize;
    let mut quote: Option<char> = None;
    let mut iter = input[from..].char_indices();

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
        if chars::is_quote(ch) {
            quote = Some(ch);
        } else if ch == open {
            depth += 1;
        } else if ch == close {
            depth -= 1;
            if depth == 0 {
                return Some(from + i);
            }
        }
    }

    None
}

/// Scanner over one selector string
struct Scanner<'a> {
    input: &'a str,
    index: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Scanner { input, index: 0 }
    }

    fn scan(mut self) -> Vec<Fragment> {
        let mut fragments = Vec::new();
        while !self.at_end() {
            let fragment = self.scan_fragment().unwrap_or_else(|| self.scan_raw());
            fragments.push(fragment);
        }
        fragments
    }

    /// Recognition rules in priority order, first match wins
    fn scan_fragment(&mut self) -> Option<Fragment> {
        self.scan_identifier()
            .or_else(|| self.scan_class())
            .or_else(|| self.scan_id())
            .or_else(|| self.scan_attribute())
            .or_else(|| self.scan_pseudo())
            .or_else(|| self.scan_combinator())
            .or_else(|| self.scan_universal())
            .or_else(|| self.scan_whitespace())
            .or_else(|| self.scan_string())
            .or_else(|| self.scan_comment())
    }

    fn at_end(&self) -> bool {
        self.index >= self.input.len()
    }

    fn peek(&self) -> char {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> char {
        self.input[self.index..].chars().nth(offset).unwrap_or(chars::EOF)
    }

    fn advance(&mut self) {
        if let Some(ch) = self.input[self.index..].chars().next() {
            self.index += ch.len_utf8();
        }
    }

    fn eat(&mut self, ch: char) -> bool {
        if !self.at_end() && self.peek() == ch {
            self.advance();
            true
        } else {
            false
        }
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> bool {
        let start = self.index;
        while !self.at_end() && pred(self.peek()) {
            self.advance();
        }
        self.index > start
    }

    fn text_from(&self, start: usize) -> String {
        self.input[start..self.index].to_string()
    }

    /// One identifier character; a backslash escapes whatever follows it
    fn eat_identifier_char(&mut self, first: bool) -> bool {
        if self.at_end() {
            return false;
        }
        let ch = self.peek();
        if ch == chars::BACKSLASH {
            if self.index + 1 >= self.input.len() {
                return false;
            }
            self.advance();
            self.advance();
            return true;
        }
        let matches = if first {
            chars::is_identifier_start(ch)
        } else {
            chars::is_identifier_part(ch)
        };
        if matches {
            self.advance();
        }
        matches
    }

    fn consume_identifier(&mut self) -> bool {
        let start = self.index;
        self.eat(chars::MINUS);
        if self.eat_identifier_char(true) {
            while self.eat_identifier_char(false) {}
            return true;
        }
        self.index = start;
        false
    }

    fn scan_identifier(&mut self) -> Option<Fragment> {
        let start = self.index;
        if self.consume_identifier() {
            Some(Fragment::Identifier {
                name: self.text_from(start),
            })
        } else {
            None
        }
    }

    /// `prefix` followed by an identifier; backtracks when no identifier follows
    fn scan_prefixed_name(&mut self, prefix: char) -> Option<String> {
        let start = self.index;
        if self.eat(prefix) {
            let name_start = self.index;
            if self.consume_identifier() {
                return Some(self.text_from(name_start));
            }
        }
        self.index = start;
        None
    }

    fn scan_class(&mut self) -> Option<Fragment> {
        self.scan_prefixed_name(chars::PERIOD)
            .map(|name| Fragment::Class { name })
    }

    fn scan_id(&mut self) -> Option<Fragment> {
        self.scan_prefixed_name(chars::HASH)
            .map(|name| Fragment::Id { name })
    }

    fn scan_attribute(&mut self) -> Option<Fragment> {
        if self.peek() != chars::LBRACKET || self.at_end() {
            return None;
        }
        let start = self.index;
        let end = find_closing(self.input, start + 1, chars::LBRACKET, chars::RBRACKET)?;
        self.index = end + 1;
        Some(Fragment::Attribute {
            text: self.text_from(start),
        })
    }

    fn scan_pseudo(&mut self) -> Option<Fragment> {
        let start = self.index;
        let mut colons = 0;
        while self.eat(chars::COLON) {
            colons += 1;
        }
        if colons == 0 {
            return None;
        }

        let name_start = self.index;
        if !self.consume_identifier() {
            self.index = start;
            return None;
        }
        let mut pseudo = Pseudo::new(colons, self.text_from(name_start));

        if self.eat(chars::LPAREN) {
            let args_start = self.index;
            match find_closing(self.input, args_start, chars::LPAREN, chars::RPAREN) {
                Some(end) => {
                    pseudo = pseudo.with_arguments(tokenize(&self.input[args_start..end]), true);
                    self.index = end + 1;
                }
                None => {
                    pseudo = pseudo.with_arguments(tokenize(&self.input[args_start..]), false);
                    self.index = self.input.len();
                }
            }
        }

        Some(if colons == 1 {
            Fragment::PseudoClass(pseudo)
        } else {
            Fragment::PseudoElement(pseudo)
        })
    }

    fn scan_combinator(&mut self) -> Option<Fragment> {
        let start = self.index;
        self.eat_while(chars::is_whitespace);
        if !self.at_end() && chars::is_combinator(self.peek()) {
            self.advance();
            self.eat_while(chars::is_whitespace);
            return Some(Fragment::Combinator {
                text: self.text_from(start),
            });
        }
        self.index = start;
        None
    }

    fn scan_universal(&mut self) -> Option<Fragment> {
        if self.eat(chars::STAR) {
            Some(Fragment::Universal)
        } else {
            None
        }
    }

    fn scan_whitespace(&mut self) -> Option<Fragment> {
        let start = self.index;
        if self.eat_while(chars::is_whitespace) {
            Some(Fragment::Whitespace {
                text: self.text_from(start),
            })
        } else {
            None
        }
    }

    /// Quoted string; an unescaped newline ends it without being consumed
    fn scan_string(&mut self) -> Option<Fragment> {
        let quote = self.peek();
        if self.at_end() || !chars::is_quote(quote) {
            return None;
        }
        let start = self.index;
        self.advance();

        while !self.at_end() {
            let ch = self.peek();
            if ch == quote {
                self.advance();
                break;
            }
            if chars::is_new_line(ch) {
                break;
            }
            if ch == chars::BACKSLASH {
                // escaped newline continues the string
                self.advance();
            }
            self.advance();
        }

        Some(Fragment::String {
            text: self.text_from(start),
        })
    }

    fn scan_comment(&mut self) -> Option<Fragment> {
        if self.peek() != chars::SLASH || self.peek_at(1) != chars::STAR || self.at_end() {
            return None;
        }
        let start = self.index;
        self.index = chars::comment_end(self.input, start);
        Some(Fragment::Comment {
            text: self.text_from(start),
        })
    }

    fn scan_raw(&mut self) -> Fragment {
        let start = self.index;
        self.advance();
        Fragment::Raw {
            text: self.text_from(start),
        }
    }
}
