//! Implementation of the passage tokenizer
//!
//! Tokenization is an ordered alternation, not a longest-match automaton: at every position the
//! patterns in [`TOKEN_PATTERNS`] are tried in declaration order and the first one that matches
//! wins. Reordering them changes what gets recognized (generic text must stay last, `is not`
//! must precede `is`, `->` must precede `-`).

use crate::weft::error::ParseError;
use crate::weft::lexer::tokens::{Token, TokenKind};
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// Token paired with its byte range in the source.
pub type TokenSpan = (Token, Range<usize>);

/// Token patterns, tried in this order. Every pattern is anchored at the cursor.
const PATTERN_SOURCES: &[(TokenKind, &str)] = &[
    (TokenKind::Whitespace, r"^\s+"),
    (TokenKind::LinkOpen, r"^\[\["),
    (TokenKind::LinkClose, r"^\]\]"),
    (TokenKind::LinkArrow, r"^->"),
    (TokenKind::HookOpen, r"^\["),
    (TokenKind::HookClose, r"^\]"),
    (TokenKind::MacroName, r"^\([A-Za-z_][A-Za-z0-9_-]*:"),
    (TokenKind::CloseParen, r"^\)"),
    (TokenKind::Keyword, r"^to\b"),
    (TokenKind::Variable, r"^\$[A-Za-z_][A-Za-z0-9_]*"),
    (TokenKind::StringLiteral, r#"^"(?:[^"\\]|\\.)*""#),
    (TokenKind::Time, r"^\d+(?:\.\d+)?m?s\b"),
    (TokenKind::Number, r"^\d+(?:\.\d+)?\b"),
    (TokenKind::Boolean, r"^(?:true|false)\b"),
    (
        TokenKind::Comparison,
        r"^(?:>=|<=|>|<|is\s+not\b|is\b|contains\b|does\s+not\s+contain\b)",
    ),
    (TokenKind::Arithmetic, r"^[-+*/]"),
    (TokenKind::Logical, r"^(?:and|or)\b"),
    (TokenKind::Property, r"^(?:'s\b|its\b|of\b)"),
    (TokenKind::Binding, r"^(?:2bind|bind)\b"),
    (TokenKind::Comma, r"^,"),
    // A word stops before anything that could start another token; a stray `(`, `$`, `"`,
    // `=` and friends that start nothing else are taken one character at a time.
    (TokenKind::Text, r#"^(?:[^\s\[\]()$",<>+*/-]+|(?s:.))"#),
];

/// Compiled token patterns, in priority order.
pub static TOKEN_PATTERNS: Lazy<Vec<(TokenKind, Regex)>> = Lazy::new(|| {
    PATTERN_SOURCES
        .iter()
        .map(|(kind, pattern)| {
            (
                *kind,
                Regex::new(pattern).expect("token patterns are valid regexes"),
            )
        })
        .collect()
});

/// Tokenize a passage, dropping whitespace.
///
/// Fails with [`ParseError::Tokenization`] when no pattern matches at the cursor.
pub fn tokenize(source: &str) -> Result<Vec<TokenSpan>, ParseError> {
    tokenize_with(&TOKEN_PATTERNS, source)
}

/// Tokenize with an explicit pattern list.
fn tokenize_with(patterns: &[(TokenKind, Regex)], source: &str) -> Result<Vec<TokenSpan>, ParseError> {
    let mut tokens = Vec::new();
    let mut offset = 0;

    while offset < source.len() {
        let rest = &source[offset..];
        let (kind, len) = patterns
            .iter()
            .find_map(|(kind, regex)| {
                regex
                    .find(rest)
                    .filter(|m| m.start() == 0 && !m.is_empty())
                    .map(|m| (*kind, m.end()))
            })
            .ok_or_else(|| ParseError::tokenization(source, offset))?;

        if kind != TokenKind::Whitespace {
            tokens.push((Token::new(kind, &rest[..len]), offset..offset + len));
        }
        offset += len;
    }

    Ok(tokens)
}

/// Tokenize and keep only the kinds; handy for tests and the `token-simple` format.
pub fn token_kinds(source: &str) -> Result<Vec<TokenKind>, ParseError> {
    Ok(tokenize(source)?
        .into_iter()
        .map(|(token, _)| token.kind)
        .collect())
}

/// Re-split bracket runs the tokenizer cannot tell apart on its own.
///
/// The tokenizer always reads `[[` and `]]` as link brackets, so `(if: $a)[(if: $b)[x]]` would
/// never close its outer hook and `(if: $x)[[[Home]]]` would open a link around a hook. Brackets
/// are tracked on a stack:
/// - `[[` directly followed by `[` becomes `[` `[[`, since a link never holds a hook;
/// - `]]` whose innermost open bracket is a `[` becomes `]` `]`.
///
/// Unbalanced closers are left alone for the parser to report.
pub fn resolve_bracket_runs(tokens: Vec<TokenSpan>) -> Vec<TokenSpan> {
    let mut open: Vec<TokenKind> = Vec::new();
    let mut resolved = Vec::with_capacity(tokens.len());
    let mut tokens = tokens.into_iter().peekable();

    while let Some((token, span)) = tokens.next() {
        match token.kind {
            TokenKind::LinkOpen => {
                let hook_follows = matches!(
                    tokens.peek(),
                    Some((next, next_span))
                        if next.kind == TokenKind::HookOpen && next_span.start == span.end
                );
                if hook_follows {
                    let Some((_, hook_span)) = tokens.next() else {
                        continue;
                    };
                    let middle = span.start + 1;
                    open.push(TokenKind::HookOpen);
                    open.push(TokenKind::LinkOpen);
                    resolved.push((Token::new(TokenKind::HookOpen, "["), span.start..middle));
                    resolved.push((Token::new(TokenKind::LinkOpen, "[["), middle..hook_span.end));
                    continue;
                }
                open.push(TokenKind::LinkOpen);
            }
            TokenKind::HookOpen => open.push(TokenKind::HookOpen),
            TokenKind::HookClose => {
                if open.last() == Some(&TokenKind::HookOpen) {
                    open.pop();
                }
            }
            TokenKind::LinkClose => match open.last() {
                Some(TokenKind::LinkOpen) => {
                    open.pop();
                }
                Some(TokenKind::HookOpen) => {
                    open.pop();
                    if open.last() == Some(&TokenKind::HookOpen) {
                        open.pop();
                    }
                    let middle = span.start + 1;
                    resolved.push((Token::new(TokenKind::HookClose, "]"), span.start..middle));
                    resolved.push((Token::new(TokenKind::HookClose, "]"), middle..span.end));
                    continue;
                }
                _ => {}
            },
            _ => {}
        }
        resolved.push((token, span));
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use TokenKind::*;

    #[test]
    fn test_simple_tokenization() {
        let tokens = token_kinds("hello world").unwrap();
        assert_eq!(tokens, vec![Text, Text]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(token_kinds("").unwrap(), vec![]);
        assert_eq!(token_kinds("  \n\t ").unwrap(), vec![]);
    }

    #[test]
    fn test_set_macro_tokenization() {
        let tokens = token_kinds("(set: $gold to 5)").unwrap();
        assert_eq!(tokens, vec![MacroName, Variable, Keyword, Number, CloseParen]);
    }

    #[test]
    fn test_link_tokenization() {
        let tokens = token_kinds("[[Go back->Home]]").unwrap();
        assert_eq!(tokens, vec![LinkOpen, Text, Text, LinkArrow, Text, LinkClose]);
    }

    #[test]
    fn test_hook_after_macro() {
        let tokens = token_kinds("(if: $score > 10)[You win!]").unwrap();
        assert_eq!(
            tokens,
            vec![
                MacroName, Variable, Comparison, Number, CloseParen, HookOpen, Text, Text,
                HookClose
            ]
        );
    }

    #[test]
    fn test_spans_partition_non_whitespace() {
        let source = "(print: \"a b\")  $x";
        let tokens = tokenize(source).unwrap();
        let texts: Vec<&str> = tokens.iter().map(|(_, span)| &source[span.clone()]).collect();
        assert_eq!(texts, vec!["(print:", "\"a b\"", ")", "$x"]);
        for (token, span) in &tokens {
            assert_eq!(token.text, &source[span.clone()]);
        }
    }

    #[test]
    fn test_operator_priority() {
        assert_eq!(token_kinds("is not").unwrap(), vec![Comparison]);
        assert_eq!(token_kinds("does  not contain").unwrap(), vec![Comparison]);
        assert_eq!(token_kinds(">=").unwrap(), vec![Comparison]);
        assert_eq!(token_kinds("->").unwrap(), vec![LinkArrow]);
        assert_eq!(token_kinds("- >").unwrap(), vec![Arithmetic, Comparison]);
    }

    #[test]
    fn test_word_boundaries() {
        assert_eq!(token_kinds("island").unwrap(), vec![Text]);
        assert_eq!(token_kinds("tomorrow").unwrap(), vec![Text]);
        assert_eq!(token_kinds("often").unwrap(), vec![Text]);
        assert_eq!(token_kinds("2bind").unwrap(), vec![Binding]);
        assert_eq!(token_kinds("$a's").unwrap(), vec![Variable, Property]);
    }

    #[test]
    fn test_time_before_number() {
        assert_eq!(token_kinds("2s").unwrap(), vec![Time]);
        assert_eq!(token_kinds("1.5s").unwrap(), vec![Time]);
        assert_eq!(token_kinds("500ms").unwrap(), vec![Time]);
        assert_eq!(token_kinds("500").unwrap(), vec![Number]);
    }

    #[test]
    fn test_lone_specials_become_text() {
        let tokens = token_kinds("Hello (world) $ \"").unwrap();
        assert_eq!(tokens, vec![Text, Text, Text, CloseParen, Text, Text]);
    }

    #[test]
    fn test_text_stops_before_operators() {
        assert_eq!(token_kinds("well-known").unwrap(), vec![Text, Arithmetic, Text]);
        assert_eq!(token_kinds("a->b").unwrap(), vec![Text, LinkArrow, Text]);
        assert_eq!(token_kinds("3rd").unwrap(), vec![Text]);
        assert_eq!(token_kinds("=").unwrap(), vec![Text]);
    }

    #[test]
    fn test_comma_splits_text() {
        assert_eq!(token_kinds("red, blue").unwrap(), vec![Text, Comma, Text]);
    }

    #[test]
    fn test_unmatched_input_is_a_tokenization_error() {
        let patterns: Vec<(TokenKind, Regex)> = vec![
            (Whitespace, Regex::new(r"^\s+").unwrap()),
            (Number, Regex::new(r"^\d+").unwrap()),
        ];
        let err = tokenize_with(&patterns, "12 x").unwrap_err();
        assert_eq!(
            err,
            ParseError::Tokenization {
                offset: 3,
                fragment: "x".to_string()
            }
        );
    }

    #[test]
    fn test_double_close_ends_nested_hooks() {
        let tokens = resolve_bracket_runs(tokenize("[a [b]]").unwrap());
        let kinds: Vec<TokenKind> = tokens.iter().map(|(t, _)| t.kind).collect();
        assert_eq!(kinds, vec![HookOpen, Text, HookOpen, Text, HookClose, HookClose]);
        assert_eq!(tokens[4].1, 5..6);
        assert_eq!(tokens[5].1, 6..7);
    }

    #[test]
    fn test_link_close_is_kept_inside_hooks() {
        let tokens = resolve_bracket_runs(tokenize("[go [[Home]]]").unwrap());
        let kinds: Vec<TokenKind> = tokens.iter().map(|(t, _)| t.kind).collect();
        assert_eq!(
            kinds,
            vec![HookOpen, Text, LinkOpen, Text, LinkClose, HookClose]
        );
        assert_eq!(
            token_kinds("]]").unwrap(),
            resolve_bracket_runs(tokenize("]]").unwrap())
                .into_iter()
                .map(|(t, _)| t.kind)
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_triple_open_starts_hook_then_link() {
        let tokens = resolve_bracket_runs(tokenize("[[[Home]]]").unwrap());
        let kinds: Vec<TokenKind> = tokens.iter().map(|(t, _)| t.kind).collect();
        assert_eq!(kinds, vec![HookOpen, LinkOpen, Text, LinkClose, HookClose]);
        assert_eq!(tokens[0].1, 0..1);
        assert_eq!(tokens[1].1, 1..3);
        assert_eq!(tokens[1].0.text, "[[");
    }

    #[test]
    fn test_spaced_link_then_hook_is_left_alone() {
        let kinds: Vec<TokenKind> = resolve_bracket_runs(tokenize("[[ [x").unwrap())
            .into_iter()
            .map(|(t, _)| t.kind)
            .collect();
        assert_eq!(kinds, vec![LinkOpen, HookOpen, Text]);
    }

    #[test]
    fn test_string_literal_with_escaped_quote() {
        let tokens = tokenize(r#""say \"hi\"""#).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].0.kind, StringLiteral);
    }
}
