//! Syntax tree produced by the parser
//!
//! Nodes are plain owned values. Every node serializes with a `"type"` field naming its
//! variant, and implements [`AstNode`] for uniform display.

pub mod elements;
pub mod traits;

pub use elements::{
    Arithmetic, ArithmeticOperator, Comparison, ComparisonOperator, Expression, HookContent,
    Keyword, KeywordArg, Link, Literal, Macro, MacroArguments, Node, Program, Text, UnknownMacro,
};
pub use traits::AstNode;
