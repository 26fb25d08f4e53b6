//! Parser combinator helpers shared by the grammar rules.

use chumsky::prelude::*;
use std::ops::Range;

pub(crate) use crate::weft::lexer::TokenSpan;
use crate::weft::lexer::TokenKind;

/// Type alias for parser error
pub(crate) type ParserError = Simple<TokenSpan>;

/// Helper: match a token of the given kind, yielding its byte range
pub(crate) fn token(kind: TokenKind) -> impl Parser<TokenSpan, Range<usize>, Error = ParserError> + Clone {
    filter(move |(t, _): &TokenSpan| t.kind == kind).map(|(_, span)| span)
}

/// Helper: match a token of the given kind, yielding its text and byte range
pub(crate) fn token_text(
    kind: TokenKind,
) -> impl Parser<TokenSpan, (String, Range<usize>), Error = ParserError> + Clone {
    filter(move |(t, _): &TokenSpan| t.kind == kind).map(|(t, span)| (t.text, span))
}

/// Parse a run of one or more tokens accepted by `accept`, yielding their byte ranges
pub(crate) fn token_run(
    accept: fn(&TokenKind) -> bool,
) -> impl Parser<TokenSpan, Vec<Range<usize>>, Error = ParserError> + Clone {
    filter(move |(t, _): &TokenSpan| accept(&t.kind))
        .repeated()
        .at_least(1)
        .map(|tokens: Vec<TokenSpan>| tokens.into_iter().map(|(_, span)| span).collect())
}

/// Helper: compute byte range bounds from multiple ranges
pub(crate) fn compute_byte_range_bounds(ranges: &[Range<usize>]) -> Range<usize> {
    if ranges.is_empty() {
        0..0
    } else {
        let start = ranges.iter().map(|r| r.start).min().unwrap_or(0);
        let end = ranges.iter().map(|r| r.end).max().unwrap_or(0);
        start..end
    }
}

/// Helper: extract the trimmed source text covered by a range
pub(crate) fn extract_text(source: &str, range: &Range<usize>) -> String {
    if range.start >= range.end || range.end > source.len() {
        return String::new();
    }
    source
        .get(range.clone())
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}
