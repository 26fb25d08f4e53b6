//! Hook parsing
//!
//!     hook  := "[" child* "]"
//!     child := macro | link | hook | string | variable | prose
//!
//! Hooks nest and can hold macros, which can in turn carry hooks, so the hook parser is
//! built around the (recursive) macro parser it is given.

use chumsky::prelude::*;
use chumsky::recursive::Recursive;
use std::sync::Arc;

use super::combinators::{compute_byte_range_bounds, token, token_run, ParserError, TokenSpan};
use super::intermediate_ast::{HookWithSpans, MacroWithSpans, NodeWithSpans};
use super::links::link;
use super::literals::hook_literal;
use crate::weft::lexer::TokenKind;

/// Build a hook parser around a macro parser
pub(crate) fn hook_content<M>(
    source: Arc<String>,
    macro_call: M,
) -> impl Parser<TokenSpan, HookWithSpans, Error = ParserError> + Clone
where
    M: Parser<TokenSpan, MacroWithSpans, Error = ParserError> + Clone + 'static,
{
    recursive(
        move |hook: Recursive<'static, TokenSpan, HookWithSpans, ParserError>| {
            let prose = token_run(TokenKind::is_prose)
                .map(|spans| NodeWithSpans::Text(compute_byte_range_bounds(&spans)));

            let child = choice((
                macro_call.map(NodeWithSpans::Macro),
                link(source).map(NodeWithSpans::Link),
                hook.map(NodeWithSpans::Hook),
                hook_literal().map(NodeWithSpans::Literal),
                prose,
            ));

            token(TokenKind::HookOpen)
                .then(child.repeated())
                .then(token(TokenKind::HookClose))
                .map(|((open, children), close)| HookWithSpans {
                    children,
                    span: open.start..close.end,
                })
        },
    )
}
