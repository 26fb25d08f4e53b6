//! Expression parsing
//!
//!     arithmetic := value (arith-op value)?
//!     comparison := arithmetic cmp-op arithmetic
//!     expression := comparison | arithmetic
//!
//! Comparison is tried first so that `$a > 1` is not cut short after `$a`.

use chumsky::prelude::*;

use super::combinators::{ParserError, TokenSpan};
use super::literals::literal;
use crate::weft::ast::{ArithmeticOperator, ComparisonOperator, Expression};
use crate::weft::lexer::TokenKind;

pub(crate) fn arithmetic_operator(
) -> impl Parser<TokenSpan, ArithmeticOperator, Error = ParserError> + Clone {
    filter_map(|span, (token, range): TokenSpan| {
        match token.kind {
            TokenKind::Arithmetic => ArithmeticOperator::from_symbol(&token.text),
            _ => None,
        }
        .ok_or_else(|| Simple::expected_input_found(span, Vec::new(), Some((token, range))))
    })
}

pub(crate) fn comparison_operator(
) -> impl Parser<TokenSpan, ComparisonOperator, Error = ParserError> + Clone {
    filter_map(|span, (token, range): TokenSpan| {
        match token.kind {
            TokenKind::Comparison => ComparisonOperator::from_symbol(&token.text),
            _ => None,
        }
        .ok_or_else(|| Simple::expected_input_found(span, Vec::new(), Some((token, range))))
    })
}

/// A value, optionally combined with a second value by one arithmetic operator
pub(crate) fn arithmetic() -> impl Parser<TokenSpan, Expression, Error = ParserError> + Clone {
    let operand = literal().map(Expression::Value);
    operand
        .clone()
        .then(arithmetic_operator().then(operand).or_not())
        .map(|(left, rest)| match rest {
            Some((operator, right)) => Expression::arithmetic(operator, left, right),
            None => left,
        })
}

/// Two arithmetic expressions joined by a comparison operator
pub(crate) fn comparison() -> impl Parser<TokenSpan, Expression, Error = ParserError> + Clone {
    arithmetic()
        .then(comparison_operator())
        .then(arithmetic())
        .map(|((left, operator), right)| Expression::comparison(operator, left, right))
}

pub(crate) fn expression() -> impl Parser<TokenSpan, Expression, Error = ParserError> + Clone {
    comparison().or(arithmetic())
}
