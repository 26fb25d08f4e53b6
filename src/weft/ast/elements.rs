//! AST element definitions
//!
//! One file per node type. [`Node`] is the sum type used wherever content can appear.

pub mod expression;
pub mod hook;
pub mod link;
pub mod literal;
pub mod macro_call;
pub mod node;
pub mod program;
pub mod text;

pub use expression::{
    Arithmetic, ArithmeticOperator, Comparison, ComparisonOperator, Expression,
};
pub use hook::HookContent;
pub use link::Link;
pub use literal::Literal;
pub use macro_call::{Keyword, KeywordArg, Macro, MacroArguments, UnknownMacro};
pub use node::Node;
pub use program::Program;
pub use text::Text;
