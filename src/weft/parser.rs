//! Parser module for passage markup
//!
//! Parsing runs in three steps:
//! 1. **Tokenizing**: ordered-pattern tokenizer ([`crate::weft::lexer`])
//! 2. **Grammar**: chumsky combinators over `(Token, Range<usize>)` produce an intermediate
//!    tree that still carries byte ranges
//! 3. **Conversion**: text is sliced from the source, macros are checked against the
//!    [`MacroCatalog`](crate::weft::catalog::MacroCatalog), and the final [`Program`] is built
//!
//! Grammar rules never look at macro names. Known and unknown macros share one syntactic
//! shape and are told apart only during conversion.

pub mod api;
pub(crate) mod ast_conversion;
pub(crate) mod combinators;
pub(crate) mod expressions;
pub(crate) mod hooks;
pub(crate) mod intermediate_ast;
pub(crate) mod links;
pub(crate) mod literals;
pub(crate) mod macros;
pub(crate) mod program;
#[cfg(test)]
mod tests;

pub use crate::weft::ast::Program;
pub use api::{parse, parse_with_catalog};
