//! CSS module
//!
//! Generic stylesheet AST with a tolerant parser, a printer and a mutable
//! visitor. Parsing and printing an untouched tree is lossless.

pub mod ast;
pub mod parser;
pub mod serializer;
pub mod visitor;

pub use ast::{AtRule, Comment, Declaration, Node, Raw, Rule, Stylesheet};
pub use parser::parse_stylesheet;
pub use serializer::{stringify, stringify_node};
pub use visitor::{visit_all, visit_stylesheet, VisitorMut};
