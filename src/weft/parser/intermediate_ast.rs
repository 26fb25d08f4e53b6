//! Intermediate tree produced by the grammar rules
//!
//! Mirrors the final AST but keeps byte ranges instead of extracted text, and keeps macro
//! arguments unchecked. [`ast_conversion`](super::ast_conversion) turns it into a `Program`.

use std::ops::Range;

use crate::weft::ast::{Link, Literal, MacroArguments};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum NodeWithSpans {
    /// Byte range of a prose run, from its first token to its last
    Text(Range<usize>),
    Literal(Literal),
    Hook(HookWithSpans),
    Link(Link),
    Macro(MacroWithSpans),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct HookWithSpans {
    pub children: Vec<NodeWithSpans>,
    pub span: Range<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MacroWithSpans {
    pub name: String,
    /// From the opening `(` to the closing `)`, hook excluded
    pub lexeme: Range<usize>,
    pub arguments: MacroArguments,
    pub hook: Option<HookWithSpans>,
}
