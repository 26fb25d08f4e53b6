//! Output format implementations for AST serialization
//!
//! JSON and YAML come straight from serde; treeviz is a compact, human-oriented view.

pub mod treeviz;

pub use treeviz::to_treeviz_str;
