//! Public API for the parser.

use chumsky::prelude::*;
use std::sync::Arc;

use super::ast_conversion::convert_program;
use super::combinators::{ParserError, TokenSpan};
use super::program::{program_item, program_items};
use crate::weft::ast::Program;
use crate::weft::catalog::MacroCatalog;
use crate::weft::error::ParseError;
use crate::weft::lexer::{resolve_bracket_runs, tokenize};

/// Parse a passage using the built-in macro table.
///
/// # Example
///
/// ```rust,ignore
/// use weft::parse;
///
/// let program = parse("(if: $score > 10)[You win!]")?;
/// assert_eq!(program.expressions.len(), 1);
/// ```
pub fn parse(source: &str) -> Result<Program, ParseError> {
    parse_with_catalog(source, MacroCatalog::builtin())
}

/// Parse a passage, validating macros against `catalog`.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse_with_catalog(source: &str, catalog: &MacroCatalog) -> Result<Program, ParseError> {
    let tokens = resolve_bracket_runs(tokenize(source)?);
    tracing::debug!(tokens = tokens.len(), "tokenized");

    let shared_source = Arc::new(source.to_string());
    let (nodes, rest) = program_items(shared_source.clone())
        .parse(tokens)
        .map_err(|errors| classify(source, &[], errors))?;

    if !rest.is_empty() {
        return Err(stop_error(source, shared_source, rest));
    }

    let program = convert_program(source, nodes, catalog)?;
    tracing::debug!(
        expressions = program.expressions.len(),
        nodes = program.node_count(),
        "parsed"
    );
    Ok(program)
}

/// Explain why the item loop stopped in front of `rest`.
///
/// The next item is parsed again in isolation: if it got past its first token the construct
/// is broken, otherwise nothing can start there at all.
fn stop_error(source: &str, shared_source: Arc<String>, rest: Vec<TokenSpan>) -> ParseError {
    match program_item(shared_source).parse(rest.clone()) {
        Ok(_) => match rest.first() {
            Some((_, span)) => ParseError::trailing_input(source, span.start),
            None => ParseError::trailing_input(source, source.len()),
        },
        Err(errors) => classify(source, &rest, errors),
    }
}

/// Map chumsky errors over `tokens` to a single parse error.
fn classify(source: &str, tokens: &[TokenSpan], errors: Vec<ParserError>) -> ParseError {
    let Some(error) = errors.into_iter().max_by_key(|e| e.span().start) else {
        return ParseError::no_matching_rule(source, "end of input", source.len());
    };

    match error.found() {
        None => ParseError::no_matching_rule(source, "end of input", source.len()),
        Some((token, span)) if error.span().start > 0 => {
            ParseError::no_matching_rule(source, token.kind.name(), span.start)
        }
        Some(_) => {
            let offset = tokens
                .first()
                .map(|(_, span)| span.start)
                .unwrap_or(source.len());
            ParseError::trailing_input(source, offset)
        }
    }
}
