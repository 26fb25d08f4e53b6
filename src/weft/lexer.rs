//! Lexer module for passage markup
//!
//! This module contains the tokenization logic: token definitions and the ordered-pattern
//! tokenizer that produces `(Token, Range<usize>)` pairs for the parser.
//!
//! Whitespace
//!
//!     Whitespace and newlines are matched and discarded; nothing in the grammar depends on
//!     them. Prose keeps its inner spacing anyway, because text nodes are sliced out of the
//!     source between the first and last token of a run rather than rebuilt from tokens.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{resolve_bracket_runs, token_kinds, tokenize, TokenSpan, TOKEN_PATTERNS};
pub use tokens::{Token, TokenKind};
