//! Link parsing
//!
//!     link := "[[" segment ("->" segment)* "]]"
//!
//! A segment is any run of tokens other than brackets and arrows. With more than one arrow the
//! last one separates the target, so `[[a->b->c]]` links text `a->b` to `c`. Text is sliced
//! from the source, which keeps inner spacing and punctuation intact.

use chumsky::prelude::*;
use std::ops::Range;
use std::sync::Arc;

use super::combinators::{
    compute_byte_range_bounds, extract_text, token, token_run, ParserError, TokenSpan,
};
use crate::weft::ast::Link;
use crate::weft::lexer::TokenKind;

/// Parse a link segment, yielding the byte range it covers
fn segment() -> impl Parser<TokenSpan, Range<usize>, Error = ParserError> + Clone {
    token_run(TokenKind::is_link_text).map(|spans| compute_byte_range_bounds(&spans))
}

pub(crate) fn link(source: Arc<String>) -> impl Parser<TokenSpan, Link, Error = ParserError> + Clone {
    token(TokenKind::LinkOpen)
        .ignore_then(segment().separated_by(token(TokenKind::LinkArrow)).at_least(1))
        .then_ignore(token(TokenKind::LinkClose))
        .map(move |segments: Vec<Range<usize>>| build_link(&source, &segments))
}

fn build_link(source: &str, segments: &[Range<usize>]) -> Link {
    match segments.split_last() {
        Some((target, text)) if !text.is_empty() => Link::new(
            extract_text(source, &compute_byte_range_bounds(text)),
            extract_text(source, target),
        ),
        _ => Link::to_self(extract_text(source, &compute_byte_range_bounds(segments))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weft::lexer::tokenize;

    fn parse_link(source: &str) -> Result<Link, Vec<ParserError>> {
        link(Arc::new(source.to_string()))
            .then_ignore(end())
            .parse(tokenize(source).unwrap())
    }

    #[test]
    fn test_simple_link() {
        assert_eq!(parse_link("[[Home]]").unwrap(), Link::new("Home", "Home"));
    }

    #[test]
    fn test_arrow_link_is_trimmed() {
        assert_eq!(
            parse_link("[[ Back -> Home ]]").unwrap(),
            Link::new("Back", "Home")
        );
    }

    #[test]
    fn test_multi_word_text_keeps_spacing() {
        assert_eq!(
            parse_link("[[Go  back, now->The Hall]]").unwrap(),
            Link::new("Go  back, now", "The Hall")
        );
    }

    #[test]
    fn test_last_arrow_separates_target() {
        assert_eq!(
            parse_link("[[a->b->c]]").unwrap(),
            Link::new("a->b", "c")
        );
    }

    #[test]
    fn test_malformed_links() {
        assert!(parse_link("[[]]").is_err());
        assert!(parse_link("[[Home").is_err());
        assert!(parse_link("[[Back->]]").is_err());
        assert!(parse_link("[[a ] b]]").is_err());
    }
}
