//! Selector module
//!
//! Tokenizer and compound-part segmenter for single selectors.

pub mod ast;
pub mod compound;
pub mod lexer;

pub use ast::{render, Fragment, FragmentKind, Pseudo};
pub use compound::{segment, CompoundPart, Escape, Segment};
pub use lexer::tokenize;
