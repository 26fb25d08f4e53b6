//! Token definitions for passage markup
//!
//! A token is a classified slice of the source. The kind is a closed enumeration; the raw text
//! is kept verbatim so the grammar can recover payloads (variable names, string contents,
//! operator symbols) without a second lexing pass. Byte ranges travel next to the token as
//! `(Token, Range<usize>)` pairs, which is what the parser consumes.
use serde::Serialize;
use std::fmt;

/// All token kinds produced by the tokenizer, in no particular order.
///
/// The order in which they are *tried* lives in
/// [`TOKEN_PATTERNS`](crate::weft::lexer::lexer_impl::TOKEN_PATTERNS).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    /// Spaces, tabs and newlines. Matched but never emitted.
    Whitespace,
    /// `[[`
    LinkOpen,
    /// `]]`
    LinkClose,
    /// `->`
    LinkArrow,
    /// `[`
    HookOpen,
    /// `]`
    HookClose,
    /// `(name:` as a single lexeme
    MacroName,
    /// `)`
    CloseParen,
    /// The binding word `to`
    Keyword,
    /// `$name`
    Variable,
    /// `"..."`, quotes included
    StringLiteral,
    /// `2s`, `500ms`
    Time,
    Number,
    Boolean,
    /// `>= <= > < is not, is, contains, does not contain`
    Comparison,
    /// `+ - * /`
    Arithmetic,
    /// `and`, `or`
    Logical,
    /// `'s`, `its`, `of`
    Property,
    /// `bind`, `2bind`
    Binding,
    Comma,
    /// Anything else, up to the next special character
    Text,
}

impl TokenKind {
    /// Kinds that can never begin a construct and therefore read as prose in passage text.
    ///
    /// Variables and string literals are excluded; hooks turn them into literal children and
    /// the top level folds them back into text on its own.
    pub fn is_prose(&self) -> bool {
        !matches!(
            self,
            TokenKind::LinkOpen
                | TokenKind::LinkClose
                | TokenKind::HookOpen
                | TokenKind::HookClose
                | TokenKind::MacroName
                | TokenKind::Variable
                | TokenKind::StringLiteral
        )
    }

    /// Kinds allowed inside a link segment.
    pub fn is_link_text(&self) -> bool {
        !matches!(
            self,
            TokenKind::LinkOpen
                | TokenKind::LinkClose
                | TokenKind::LinkArrow
                | TokenKind::HookOpen
                | TokenKind::HookClose
        )
    }

    /// Kinds that open or close a bracketed construct.
    pub fn is_bracket(&self) -> bool {
        matches!(
            self,
            TokenKind::LinkOpen | TokenKind::LinkClose | TokenKind::HookOpen | TokenKind::HookClose
        )
    }

    /// Lowercase dash-separated name, as used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::LinkOpen => "link-open",
            TokenKind::LinkClose => "link-close",
            TokenKind::LinkArrow => "link-arrow",
            TokenKind::HookOpen => "hook-open",
            TokenKind::HookClose => "hook-close",
            TokenKind::MacroName => "macro-name",
            TokenKind::CloseParen => "close-paren",
            TokenKind::Keyword => "keyword",
            TokenKind::Variable => "variable",
            TokenKind::StringLiteral => "string",
            TokenKind::Time => "time",
            TokenKind::Number => "number",
            TokenKind::Boolean => "boolean",
            TokenKind::Comparison => "comparison",
            TokenKind::Arithmetic => "arithmetic",
            TokenKind::Logical => "logical",
            TokenKind::Property => "property",
            TokenKind::Binding => "binding",
            TokenKind::Comma => "comma",
            TokenKind::Text => "text",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.name())
    }
}

/// One lexical unit: its kind plus the exact source text it covers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}
