//! Macro pattern table
//!
//! Each known macro name maps to the argument shape it accepts. Parsing never branches on
//! macro names; the conversion pass makes exactly one lookup here per call and either gets a
//! pattern to check against, or nothing (the call becomes an `UnknownMacro`).
//!
//! Names are canonicalized before lookup: lowercased, with `-` and `_` removed. `go-to`,
//! `goto` and `Go_To` all name the same entry.

use crate::weft::ast::{Expression, Keyword, Literal, MacroArguments};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Category an argument must belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArgType {
    /// A `$variable` and nothing else.
    Variable,
    /// A string literal, or a variable holding one.
    StringLiteral,
    /// Any single literal.
    Value,
    /// Any expression.
    Expression,
}

impl ArgType {
    pub fn accepts(&self, expr: &Expression) -> bool {
        match self {
            ArgType::Variable => matches!(expr.as_literal(), Some(Literal::Variable { .. })),
            ArgType::StringLiteral => matches!(
                expr.as_literal(),
                Some(Literal::String { .. } | Literal::Variable { .. })
            ),
            ArgType::Value => expr.as_literal().is_some(),
            ArgType::Expression => true,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ArgType::Variable => "variable",
            ArgType::StringLiteral => "string",
            ArgType::Value => "value",
            ArgType::Expression => "expression",
        }
    }
}

/// Argument shape of one macro.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "kebab-case")]
pub enum ArgPattern {
    /// `left KEYWORD right`
    Keyword {
        keyword: Keyword,
        left: ArgType,
        right: ArgType,
    },
    /// A fixed-length list, one category per position.
    Positional { args: Vec<ArgType> },
    /// At least `min` arguments, all of one category.
    Variadic { min: usize, arg: ArgType },
}

impl ArgPattern {
    pub fn positional(args: &[ArgType]) -> Self {
        ArgPattern::Positional {
            args: args.to_vec(),
        }
    }

    fn describe(&self) -> String {
        match self {
            ArgPattern::Keyword {
                keyword,
                left,
                right,
            } => format!(
                "{} {} {}",
                left.description(),
                keyword,
                right.description()
            ),
            ArgPattern::Positional { args } => plural(args.len(), "argument"),
            ArgPattern::Variadic { min, arg } => {
                format!("at least {} {}", min, plural_word(*min, arg.description()))
            }
        }
    }
}

impl fmt::Display for ArgPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

fn plural(count: usize, word: &str) -> String {
    format!("{} {}", count, plural_word(count, word))
}

fn plural_word(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

/// How a call's arguments failed to fit its pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeMismatch {
    pub expected: String,
    pub actual: String,
    /// Zero-based argument index, when one argument is at fault.
    pub position: Option<usize>,
}

impl ShapeMismatch {
    fn whole(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
            actual: actual.into(),
            position: None,
        }
    }

    fn at(position: usize, expected: ArgType, actual: &Expression) -> Self {
        Self {
            expected: expected.description().to_string(),
            actual: actual.category().to_string(),
            position: Some(position),
        }
    }
}

/// Lookup key for a macro name.
pub fn canonical_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

const BUILTIN_ENTRIES: &[(&str, BuiltinShape)] = &[
    (
        "set",
        BuiltinShape::Keyword(Keyword::To, ArgType::Variable, ArgType::Expression),
    ),
    (
        "link",
        BuiltinShape::Keyword(Keyword::Arrow, ArgType::Value, ArgType::Value),
    ),
    ("if", BuiltinShape::Positional(&[ArgType::Expression])),
    ("else-if", BuiltinShape::Positional(&[ArgType::Expression])),
    ("unless", BuiltinShape::Positional(&[ArgType::Expression])),
    ("print", BuiltinShape::Positional(&[ArgType::Expression])),
    ("else", BuiltinShape::Positional(&[])),
    ("history", BuiltinShape::Positional(&[])),
    ("go-to", BuiltinShape::Positional(&[ArgType::Value])),
    ("live", BuiltinShape::Positional(&[ArgType::Value])),
    ("display", BuiltinShape::Positional(&[ArgType::StringLiteral])),
    ("visited", BuiltinShape::Positional(&[ArgType::StringLiteral])),
    (
        "random",
        BuiltinShape::Positional(&[ArgType::Value, ArgType::Value]),
    ),
    ("either", BuiltinShape::Variadic(1, ArgType::Value)),
    ("a", BuiltinShape::Variadic(0, ArgType::Expression)),
    ("array", BuiltinShape::Variadic(0, ArgType::Expression)),
];

/// Const-friendly form of [`ArgPattern`] for the built-in entries.
enum BuiltinShape {
    Keyword(Keyword, ArgType, ArgType),
    Positional(&'static [ArgType]),
    Variadic(usize, ArgType),
}

impl BuiltinShape {
    fn to_pattern(&self) -> ArgPattern {
        match self {
            BuiltinShape::Keyword(keyword, left, right) => ArgPattern::Keyword {
                keyword: *keyword,
                left: *left,
                right: *right,
            },
            BuiltinShape::Positional(args) => ArgPattern::positional(args),
            BuiltinShape::Variadic(min, arg) => ArgPattern::Variadic {
                min: *min,
                arg: *arg,
            },
        }
    }
}

static BUILTIN: Lazy<MacroCatalog> = Lazy::new(|| {
    let mut catalog = MacroCatalog::empty();
    for (name, shape) in BUILTIN_ENTRIES {
        catalog.insert(name, shape.to_pattern());
    }
    catalog
});

/// Table of known macros and their argument patterns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MacroCatalog {
    entries: HashMap<String, ArgPattern>,
}

impl MacroCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The shared built-in table.
    pub fn builtin() -> &'static MacroCatalog {
        &BUILTIN
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, name: &str, pattern: ArgPattern) {
        self.entries.insert(canonical_name(name), pattern);
    }

    pub fn with_entry(mut self, name: &str, pattern: ArgPattern) -> Self {
        self.insert(name, pattern);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ArgPattern> {
        self.entries.get(&canonical_name(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check a call against its entry.
    ///
    /// Returns `Ok(None)` for names the table does not know, `Ok(Some(pattern))` when the
    /// arguments fit.
    pub fn check(
        &self,
        name: &str,
        arguments: &MacroArguments,
    ) -> Result<Option<&ArgPattern>, ShapeMismatch> {
        let Some(pattern) = self.get(name) else {
            return Ok(None);
        };
        match_pattern(pattern, arguments)?;
        Ok(Some(pattern))
    }
}

impl Extend<(String, ArgPattern)> for MacroCatalog {
    fn extend<T: IntoIterator<Item = (String, ArgPattern)>>(&mut self, iter: T) {
        for (name, pattern) in iter {
            self.insert(&name, pattern);
        }
    }
}

fn describe_arguments(arguments: &MacroArguments) -> String {
    match arguments {
        MacroArguments::Keyword(arg) => format!("keyword argument with {}", arg.keyword),
        MacroArguments::List(args) => plural(args.len(), "argument"),
        MacroArguments::Unparsed => "unparseable arguments".to_string(),
    }
}

fn match_pattern(pattern: &ArgPattern, arguments: &MacroArguments) -> Result<(), ShapeMismatch> {
    match (pattern, arguments) {
        (
            ArgPattern::Keyword {
                keyword,
                left,
                right,
            },
            MacroArguments::Keyword(arg),
        ) => {
            if arg.keyword != *keyword {
                return Err(ShapeMismatch::whole(
                    keyword.symbol(),
                    arg.keyword.symbol(),
                ));
            }
            if !left.accepts(&arg.left) {
                return Err(ShapeMismatch::at(0, *left, &arg.left));
            }
            if !right.accepts(&arg.right) {
                return Err(ShapeMismatch::at(1, *right, &arg.right));
            }
            Ok(())
        }
        (ArgPattern::Keyword { keyword, .. }, other) => Err(ShapeMismatch::whole(
            format!("keyword argument with {}", keyword),
            describe_arguments(other),
        )),
        (ArgPattern::Positional { args: expected }, MacroArguments::List(args)) => {
            if expected.len() != args.len() {
                return Err(ShapeMismatch::whole(
                    pattern.describe(),
                    describe_arguments(arguments),
                ));
            }
            for (position, (ty, arg)) in expected.iter().zip(args).enumerate() {
                if !ty.accepts(arg) {
                    return Err(ShapeMismatch::at(position, *ty, arg));
                }
            }
            Ok(())
        }
        (ArgPattern::Variadic { min, arg: ty }, MacroArguments::List(args)) => {
            if args.len() < *min {
                return Err(ShapeMismatch::whole(
                    pattern.describe(),
                    describe_arguments(arguments),
                ));
            }
            for (position, arg) in args.iter().enumerate() {
                if !ty.accepts(arg) {
                    return Err(ShapeMismatch::at(position, *ty, arg));
                }
            }
            Ok(())
        }
        (_, other) => Err(ShapeMismatch::whole(
            pattern.describe(),
            describe_arguments(other),
        )),
    }
}
