//! Literal values

use super::super::traits::AstNode;
use serde::Serialize;
use std::fmt;

/// An atomic value: the leaves of every expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Literal {
    /// String contents, quotes stripped.
    String { value: String },
    Number { value: f64 },
    Boolean { value: bool },
    /// Duration text as written, e.g. `2s` or `500ms`.
    Time { value: String },
    /// Variable name, sigil stripped.
    Variable { name: String },
}

impl Literal {
    pub fn string(value: impl Into<String>) -> Self {
        Literal::String {
            value: value.into(),
        }
    }

    pub fn number(value: f64) -> Self {
        Literal::Number { value }
    }

    pub fn boolean(value: bool) -> Self {
        Literal::Boolean { value }
    }

    pub fn time(value: impl Into<String>) -> Self {
        Literal::Time {
            value: value.into(),
        }
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Literal::Variable { name: name.into() }
    }

    /// Human-readable category used in macro shape errors.
    pub fn category(&self) -> &'static str {
        match self {
            Literal::String { .. } => "string literal",
            Literal::Number { .. } => "number",
            Literal::Boolean { .. } => "boolean",
            Literal::Time { .. } => "time",
            Literal::Variable { .. } => "variable",
        }
    }

    /// Duration of a time literal in milliseconds.
    pub fn duration_ms(&self) -> Option<f64> {
        let Literal::Time { value } = self else {
            return None;
        };
        if let Some(ms) = value.strip_suffix("ms") {
            ms.parse().ok()
        } else {
            value
                .strip_suffix('s')
                .and_then(|s| s.parse::<f64>().ok())
                .map(|s| s * 1000.0)
        }
    }
}

impl AstNode for Literal {
    fn node_type(&self) -> &'static str {
        match self {
            Literal::String { .. } => "String",
            Literal::Number { .. } => "Number",
            Literal::Boolean { .. } => "Boolean",
            Literal::Time { .. } => "Time",
            Literal::Variable { .. } => "Variable",
        }
    }

    fn display_label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String { value } => write!(f, "\"{}\"", value),
            Literal::Number { value } => write!(f, "{}", value),
            Literal::Boolean { value } => write!(f, "{}", value),
            Literal::Time { value } => write!(f, "{}", value),
            Literal::Variable { name } => write!(f, "${}", name),
        }
    }
}
