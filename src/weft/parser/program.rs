//! Program-level grammar
//!
//!     program := (macro | link | hook | text)*
//!
//! Top-level text absorbs every token that cannot open a construct, including variables and
//! strings, so free prose never fails to parse. Only a bracket that closes nothing, or a
//! construct that opens and then breaks, stops the loop.

use chumsky::prelude::*;
use std::sync::Arc;

use super::combinators::{compute_byte_range_bounds, token_run, ParserError, TokenSpan};
use super::hooks::hook_content;
use super::intermediate_ast::NodeWithSpans;
use super::links::link;
use super::macros::macro_call;
use crate::weft::lexer::TokenKind;

fn is_top_level_text(kind: &TokenKind) -> bool {
    kind.is_prose() || matches!(kind, TokenKind::Variable | TokenKind::StringLiteral)
}

/// Parse one top-level item
pub(crate) fn program_item(
    source: Arc<String>,
) -> impl Parser<TokenSpan, NodeWithSpans, Error = ParserError> + Clone {
    let macro_parser = macro_call(source.clone());
    let hook = hook_content(source.clone(), macro_parser.clone());
    let text = token_run(is_top_level_text)
        .map(|spans| NodeWithSpans::Text(compute_byte_range_bounds(&spans)));

    choice((
        macro_parser.map(NodeWithSpans::Macro),
        link(source).map(NodeWithSpans::Link),
        hook.map(NodeWithSpans::Hook),
        text,
    ))
}

/// Parse as many items as possible, handing back the tokens that could not be parsed
pub(crate) fn program_items(
    source: Arc<String>,
) -> impl Parser<TokenSpan, (Vec<NodeWithSpans>, Vec<TokenSpan>), Error = ParserError> + Clone {
    program_item(source)
        .repeated()
        .then(any().repeated())
        .then_ignore(end())
}
