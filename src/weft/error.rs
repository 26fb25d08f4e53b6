//! Parse errors
//!
//! Every failure surfaces as one [`ParseError`]. The set of kinds is closed: tokenization,
//! grammar, macro shape and trailing input. An unrecognized macro name is not among them; it
//! parses to [`UnknownMacro`](crate::weft::ast::UnknownMacro).

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Number of characters of source quoted in error messages.
const FRAGMENT_CHARS: usize = 24;

/// Discriminant of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    TokenizationError,
    NoMatchingRuleError,
    MacroShapeError,
    UnexpectedTrailingInputError,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::TokenizationError => "TokenizationError",
            ErrorKind::NoMatchingRuleError => "NoMatchingRuleError",
            ErrorKind::MacroShapeError => "MacroShapeError",
            ErrorKind::UnexpectedTrailingInputError => "UnexpectedTrailingInputError",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no token pattern matches at offset {offset}: {fragment:?}")]
    Tokenization { offset: usize, fragment: String },

    #[error("no grammar rule matches {found} at offset {offset}: {fragment:?}")]
    NoMatchingRule {
        found: String,
        offset: usize,
        fragment: String,
    },

    #[error("{}", describe_shape(.name, .position, .expected, .actual))]
    MacroShape {
        name: String,
        position: Option<usize>,
        expected: String,
        actual: String,
        offset: usize,
        fragment: String,
    },

    #[error("unexpected trailing input at offset {offset}: {fragment:?}")]
    UnexpectedTrailingInput { offset: usize, fragment: String },
}

fn describe_shape(name: &str, position: &Option<usize>, expected: &str, actual: &str) -> String {
    match position {
        Some(index) => format!(
            "macro ({}:) argument {}: expected {}, found {}",
            name,
            index + 1,
            expected,
            actual
        ),
        None => format!("macro ({}:): expected {}, found {}", name, expected, actual),
    }
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::Tokenization { .. } => ErrorKind::TokenizationError,
            ParseError::NoMatchingRule { .. } => ErrorKind::NoMatchingRuleError,
            ParseError::MacroShape { .. } => ErrorKind::MacroShapeError,
            ParseError::UnexpectedTrailingInput { .. } => ErrorKind::UnexpectedTrailingInputError,
        }
    }

    /// Byte offset into the source where the failing construct starts.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::Tokenization { offset, .. }
            | ParseError::NoMatchingRule { offset, .. }
            | ParseError::MacroShape { offset, .. }
            | ParseError::UnexpectedTrailingInput { offset, .. } => *offset,
        }
    }

    /// The slice of input quoted by the error.
    pub fn fragment(&self) -> &str {
        match self {
            ParseError::Tokenization { fragment, .. }
            | ParseError::NoMatchingRule { fragment, .. }
            | ParseError::MacroShape { fragment, .. }
            | ParseError::UnexpectedTrailingInput { fragment, .. } => fragment,
        }
    }

    pub(crate) fn tokenization(source: &str, offset: usize) -> Self {
        ParseError::Tokenization {
            offset,
            fragment: fragment_at(source, offset),
        }
    }

    pub(crate) fn no_matching_rule(source: &str, found: impl Into<String>, offset: usize) -> Self {
        ParseError::NoMatchingRule {
            found: found.into(),
            offset,
            fragment: fragment_at(source, offset),
        }
    }

    pub(crate) fn trailing_input(source: &str, offset: usize) -> Self {
        ParseError::UnexpectedTrailingInput {
            offset,
            fragment: fragment_at(source, offset),
        }
    }
}

/// Quote up to [`FRAGMENT_CHARS`] characters of `source` starting at byte `offset`.
pub(crate) fn fragment_at(source: &str, offset: usize) -> String {
    source
        .get(offset..)
        .unwrap_or_default()
        .chars()
        .take(FRAGMENT_CHARS)
        .collect()
}
