//! # weft
//!
//! A parser for Harlowe-style passage markup: prose interleaved with `[hooks]`, `[[links]]`
//! and `(macro: arguments)` calls.
//!
//! ```rust,ignore
//! let program = weft::parse("(set: $gold to 5)[[Shop->Market]]")?;
//! ```
//!
//! Known macros are checked against a [`MacroCatalog`]; unknown ones are kept as
//! [`UnknownMacro`] nodes instead of failing the parse.

pub mod weft;

pub use crate::weft::ast::{
    AstNode, Expression, HookContent, Keyword, Link, Literal, Macro, Node, Program, Text,
    UnknownMacro,
};
pub use crate::weft::catalog::{ArgPattern, ArgType, MacroCatalog};
pub use crate::weft::error::{ErrorKind, ParseError};
pub use crate::weft::lexer::{tokenize, Token, TokenKind};
pub use crate::weft::parser::{parse, parse_with_catalog};
