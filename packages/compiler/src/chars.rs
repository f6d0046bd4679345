/*
 * Character Codes
 *
 * Characters and classification helpers shared by the selector lexer
 * and the stylesheet parser.
 */

// Special characters
pub const EOF: char = '\0';
pub const TAB: char = '\t';
pub const LF: char = '\n'; // Line feed
pub const FF: char = '\x0C';
pub const CR: char = '\r'; // Carriage return
pub const SPACE: char = ' ';

// Punctuation
pub const DQ: char = '"';
pub const HASH: char = '#';
pub const SQ: char = '\'';
pub const LPAREN: char = '(';
pub const RPAREN: char = ')';
pub const STAR: char = '*';
pub const PLUS: char = '+';
pub const COMMA: char = ',';
pub const MINUS: char = '-';
pub const PERIOD: char = '.';
pub const SLASH: char = '/';
pub const COLON: char = ':';
pub const SEMICOLON: char = ';';
pub const GT: char = '>';
pub const AT: char = '@';

// Brackets
pub const LBRACKET: char = '[';
pub const BACKSLASH: char = '\\';
pub const RBRACKET: char = ']';
pub const UNDERSCORE: char = '_';

// Braces
pub const LBRACE: char = '{';
pub const RBRACE: char = '}';
pub const TILDA: char = '~';

/// Check if character is CSS whitespace (space, tab, line feed, carriage return, form feed)
pub fn is_whitespace(ch: char) -> bool {
    ch == SPACE || ch == TAB || ch == LF || ch == CR || ch == FF
}

/// Check if character is a digit
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Check if character is ASCII letter
pub fn is_ascii_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

/// Check if character is newline
pub fn is_new_line(ch: char) -> bool {
    ch == LF || ch == CR
}

/// Check if character is a CSS string quote
pub fn is_quote(ch: char) -> bool {
    ch == SQ || ch == DQ
}

/// Check if character is one of the child/sibling combinators
pub fn is_combinator(ch: char) -> bool {
    ch == GT || ch == PLUS || ch == TILDA
}

/// Check if character can start a CSS identifier.
///
/// Letters, underscore, hyphen and every non-ASCII code point qualify.
pub fn is_identifier_start(ch: char) -> bool {
    is_ascii_letter(ch) || ch == UNDERSCORE || ch == MINUS || (ch as u32) >= 128
}

/// Check if character can be part of a CSS identifier
pub fn is_identifier_part(ch: char) -> bool {
    is_identifier_start(ch) || is_digit(ch)
}

/// Check if a `/*` comment opens at byte `index`
pub fn starts_comment(text: &str, index: usize) -> bool {
    text.get(index..).is_some_and(|rest| rest.starts_with("/*"))
}

/// Byte index just past the comment opening at `start`, or the end of the
/// text when the comment is never closed
pub fn comment_end(text: &str, start: usize) -> usize {
    match text[start + 2..].find("*/") {
        Some(end) => start + 2 + end + 2,
        None => text.len(),
    }
}
