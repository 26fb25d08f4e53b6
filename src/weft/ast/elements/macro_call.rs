//! Macro element definitions
//!
//! A macro call is `(name: arguments)`, optionally followed by an attached hook. Arguments are
//! either one keyword argument (`$x to 5`, `"A" -> "B"`) or a comma-separated list of
//! expressions. Calls whose name is in the [catalog](crate::weft::catalog) become [`Macro`];
//! all others become [`UnknownMacro`].

use super::super::traits::AstNode;
use super::expression::Expression;
use super::hook::HookContent;
use crate::weft::catalog::ArgPattern;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Binding word of a keyword argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    #[serde(rename = "to")]
    To,
    #[serde(rename = "->")]
    Arrow,
}

impl Keyword {
    pub fn symbol(&self) -> &'static str {
        match self {
            Keyword::To => "to",
            Keyword::Arrow => "->",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// `left KEYWORD right`, e.g. `$gold to 5`.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordArg {
    pub keyword: Keyword,
    pub left: Expression,
    pub right: Expression,
}

/// Arguments as parsed, before they are checked against the catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum MacroArguments {
    Keyword(KeywordArg),
    List(Vec<Expression>),
    /// Tokens that are neither a keyword argument nor an expression list.
    Unparsed,
}

impl MacroArguments {
    pub fn keyword(&self) -> Option<Keyword> {
        match self {
            MacroArguments::Keyword(arg) => Some(arg.keyword),
            _ => None,
        }
    }

    /// Flatten into positional order; a keyword argument yields `[left, right]`.
    pub fn into_expressions(self) -> Vec<Expression> {
        match self {
            MacroArguments::Keyword(arg) => vec![arg.left, arg.right],
            MacroArguments::List(args) => args,
            MacroArguments::Unparsed => Vec::new(),
        }
    }
}

/// A call to a macro known to the catalog, with arguments that satisfy its pattern.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Macro {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<Keyword>,
    pub args: Vec<Expression>,
    pub pattern: ArgPattern,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hook: Option<HookContent>,
}

impl Macro {
    /// Display text and target of a `(link: text -> target)` call.
    pub fn link_parts(&self) -> Option<(String, String)> {
        if self.keyword != Some(Keyword::Arrow) {
            return None;
        }
        match self.args.as_slice() {
            [text, target] => Some((plain(text), plain(target))),
            _ => None,
        }
    }
}

/// A string literal's contents, or the expression's source form.
fn plain(expr: &Expression) -> String {
    match expr.as_literal() {
        Some(super::literal::Literal::String { value }) => value.clone(),
        _ => expr.to_string(),
    }
}

impl AstNode for Macro {
    fn node_type(&self) -> &'static str {
        "Macro"
    }

    fn display_label(&self) -> String {
        let args = match self.keyword {
            Some(keyword) if self.args.len() == 2 => {
                format!("{} {} {}", self.args[0], keyword, self.args[1])
            }
            _ => self
                .args
                .iter()
                .map(|arg| arg.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        };
        if args.is_empty() {
            format!("({}:)", self.name)
        } else {
            format!("({}: {})", self.name, args)
        }
    }
}

impl fmt::Display for Macro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Macro({}, {} args)", self.name, self.args.len())
    }
}

/// A syntactically valid call whose name is not in the catalog. Kept, not rejected.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct UnknownMacro {
    pub name: String,
    /// The call as written, from `(` to `)`.
    pub raw: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hook: Option<HookContent>,
}

impl AstNode for UnknownMacro {
    fn node_type(&self) -> &'static str {
        "UnknownMacro"
    }

    fn display_label(&self) -> String {
        self.raw.clone()
    }
}

impl fmt::Display for UnknownMacro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnknownMacro({})", self.name)
    }
}
