//! Literal parsing
//!
//! Each literal is exactly one token; the payload comes from the token text. A `-` directly
//! followed by a number token is read as a negative number.

use chumsky::prelude::*;

use super::combinators::{ParserError, TokenSpan};
use crate::weft::ast::Literal;
use crate::weft::lexer::{Token, TokenKind};

/// Convert a single token to a literal, if it is one.
pub(crate) fn literal_from_token(token: &Token) -> Option<Literal> {
    match token.kind {
        TokenKind::StringLiteral => Some(Literal::string(unquote(&token.text))),
        TokenKind::Number => token.text.parse().ok().map(Literal::number),
        TokenKind::Boolean => Some(Literal::boolean(token.text == "true")),
        TokenKind::Time => Some(Literal::time(token.text.clone())),
        TokenKind::Variable => token
            .text
            .strip_prefix('$')
            .map(|name| Literal::variable(name)),
        _ => None,
    }
}

/// Strip the surrounding quotes and resolve backslash escapes.
fn unquote(raw: &str) -> String {
    let inner = raw
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(raw);
    let mut value = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if let Some(escaped) = chars.next() {
                    value.push(escaped);
                }
            }
            _ => value.push(c),
        }
    }
    value
}

/// Parse a single-token literal
pub(crate) fn single_literal() -> impl Parser<TokenSpan, Literal, Error = ParserError> + Clone {
    filter_map(|span, (token, range): TokenSpan| match literal_from_token(&token) {
        Some(literal) => Ok(literal),
        None => Err(Simple::expected_input_found(
            span,
            Vec::new(),
            Some((token, range)),
        )),
    })
}

/// Parse `-` followed by a number
pub(crate) fn negative_number() -> impl Parser<TokenSpan, Literal, Error = ParserError> + Clone {
    let minus = filter(|(t, _): &TokenSpan| t.kind == TokenKind::Arithmetic && t.text == "-");
    let number = filter_map(|span, (token, range): TokenSpan| {
        match (token.kind, token.text.parse::<f64>()) {
            (TokenKind::Number, Ok(value)) => Ok(value),
            _ => Err(Simple::expected_input_found(
                span,
                Vec::new(),
                Some((token, range)),
            )),
        }
    });
    minus.ignore_then(number).map(|value| Literal::number(-value))
}

/// Parse any literal value
pub(crate) fn literal() -> impl Parser<TokenSpan, Literal, Error = ParserError> + Clone {
    negative_number().or(single_literal())
}

/// Parse a literal that may stand on its own inside a hook: a string or a variable
pub(crate) fn hook_literal() -> impl Parser<TokenSpan, Literal, Error = ParserError> + Clone {
    filter(|(t, _): &TokenSpan| {
        matches!(t.kind, TokenKind::StringLiteral | TokenKind::Variable)
    })
    .try_map(|(token, _), span| {
        literal_from_token(&token).ok_or_else(|| Simple::custom(span, "not a literal"))
    })
}
