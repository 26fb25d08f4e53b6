//! Macro parsing
//!
//!     macro     := macro-name arguments ")" hook?
//!     arguments := keyword-arg | expression ("," expression)* | unparsed
//!
//! The three argument shapes are tried in order, each together with the closing paren so a
//! shape only wins if the call actually ends after it. `unparsed` takes any run of tokens that
//! stays inside the call (nested `(name: ...)` groups are balanced), which lets unknown macros
//! with unusual arguments still parse; a known macro with unparsed arguments is rejected later
//! by the catalog check.

use chumsky::prelude::*;
use chumsky::recursive::Recursive;
use std::ops::Range;
use std::sync::Arc;

use super::combinators::{token, token_text, ParserError, TokenSpan};
use super::expressions::expression;
use super::hooks::hook_content;
use super::intermediate_ast::MacroWithSpans;
use super::literals::literal;
use crate::weft::ast::{Expression, Keyword, KeywordArg, MacroArguments};
use crate::weft::lexer::TokenKind;

/// Parse the binding word of a keyword argument
pub(crate) fn keyword() -> impl Parser<TokenSpan, Keyword, Error = ParserError> + Clone {
    filter_map(|span, (token, range): TokenSpan| match token.kind {
        TokenKind::Keyword => Ok(Keyword::To),
        TokenKind::LinkArrow => Ok(Keyword::Arrow),
        _ => Err(Simple::expected_input_found(
            span,
            Vec::new(),
            Some((token, range)),
        )),
    })
}

/// `value KEYWORD expression`
pub(crate) fn keyword_arg() -> impl Parser<TokenSpan, KeywordArg, Error = ParserError> + Clone {
    literal()
        .map(Expression::Value)
        .then(keyword())
        .then(expression())
        .map(|((left, keyword), right)| KeywordArg {
            keyword,
            left,
            right,
        })
}

/// Any run of tokens that stays inside one call, yielding nothing
fn unparsed_arguments() -> impl Parser<TokenSpan, (), Error = ParserError> + Clone {
    recursive(|element: Recursive<'static, TokenSpan, (), ParserError>| {
        let plain = filter(|(t, _): &TokenSpan| {
            !t.kind.is_bracket() && !matches!(t.kind, TokenKind::MacroName | TokenKind::CloseParen)
        })
        .ignored();
        let nested = token(TokenKind::MacroName)
            .then(element.repeated())
            .then(token(TokenKind::CloseParen))
            .ignored();
        plain.or(nested)
    })
    .repeated()
    .ignored()
}

/// Argument list and closing paren, yielding the arguments and the paren's byte range
fn arguments() -> impl Parser<TokenSpan, (MacroArguments, Range<usize>), Error = ParserError> + Clone
{
    let close = token(TokenKind::CloseParen);

    let keyword_form = keyword_arg()
        .map(MacroArguments::Keyword)
        .then(close.clone());
    let list_form = expression()
        .separated_by(token(TokenKind::Comma))
        .map(MacroArguments::List)
        .then(close.clone());
    let unparsed_form = unparsed_arguments()
        .to(MacroArguments::Unparsed)
        .then(close);

    choice((keyword_form, list_form, unparsed_form))
}

/// Parse a macro call with its optional attached hook
pub(crate) fn macro_call(
    source: Arc<String>,
) -> impl Parser<TokenSpan, MacroWithSpans, Error = ParserError> + Clone {
    recursive(
        move |macro_call: Recursive<'static, TokenSpan, MacroWithSpans, ParserError>| {
            // A `[` right after the call commits to the hook; a broken hook fails the call
            // instead of leaving the `[` for the enclosing rule to try again.
            let attached_hook = choice((
                hook_content(source, macro_call).map(Some),
                token(TokenKind::HookOpen).not().rewind().to(None),
                end().to(None),
            ));

            token_text(TokenKind::MacroName)
                .then(arguments())
                .then(attached_hook)
                .map(|(((name, open), (arguments, close)), hook)| MacroWithSpans {
                    name: macro_name(&name),
                    lexeme: open.start..close.end,
                    arguments,
                    hook,
                })
        },
    )
}

/// `(go-to:` to `go-to`
fn macro_name(lexeme: &str) -> String {
    lexeme
        .trim_start_matches('(')
        .trim_end_matches(':')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weft::ast::Literal;
    use crate::weft::lexer::tokenize;

    fn parse_macro(source: &str) -> Result<MacroWithSpans, Vec<ParserError>> {
        macro_call(Arc::new(source.to_string()))
            .then_ignore(end())
            .parse(tokenize(source).unwrap())
    }

    #[test]
    fn test_keyword_arguments() {
        let call = parse_macro("(set: $gold to 5)").unwrap();
        assert_eq!(call.name, "set");
        assert_eq!(call.lexeme, 0..17);
        assert_eq!(
            call.arguments,
            MacroArguments::Keyword(KeywordArg {
                keyword: Keyword::To,
                left: Literal::variable("gold").into(),
                right: Literal::number(5.0).into(),
            })
        );
        assert!(call.hook.is_none());
    }

    #[test]
    fn test_arrow_keyword() {
        let call = parse_macro("(link: \"A\" -> \"B\")").unwrap();
        assert_eq!(call.arguments.keyword(), Some(Keyword::Arrow));
    }

    #[test]
    fn test_list_arguments() {
        let call = parse_macro("(either: \"a\", \"b\", 3)").unwrap();
        match call.arguments {
            MacroArguments::List(args) => assert_eq!(args.len(), 3),
            other => panic!("expected a list, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_arguments() {
        let call = parse_macro("(else:)").unwrap();
        assert_eq!(call.arguments, MacroArguments::List(vec![]));
    }

    #[test]
    fn test_unparsed_arguments_balance_nested_calls() {
        let call = parse_macro("(cycle: 1 2 (x: a b) c)").unwrap();
        assert_eq!(call.name, "cycle");
        assert_eq!(call.arguments, MacroArguments::Unparsed);
        assert_eq!(call.lexeme, 0..23);
    }

    #[test]
    fn test_attached_hook_is_excluded_from_lexeme() {
        let call = parse_macro("(if: $x)[yes]").unwrap();
        assert_eq!(call.lexeme, 0..8);
        let hook = call.hook.unwrap();
        assert_eq!(hook.span, 8..13);
        assert_eq!(hook.children.len(), 1);
    }

    #[test]
    fn test_nested_macro_in_hook() {
        let call = parse_macro("(history:)[You've visited (visited: \"Room\")]").unwrap();
        let hook = call.hook.unwrap();
        assert_eq!(hook.children.len(), 2);
    }

    #[test]
    fn test_broken_attached_hook_fails_the_call() {
        let tokens = tokenize("(if: $x)[oops").unwrap();
        let result = macro_call(Arc::new("(if: $x)[oops".to_string())).parse(tokens);
        assert!(result.is_err());

        let tokens = tokenize("(if: $x) [[Home]]").unwrap();
        let call = macro_call(Arc::new("(if: $x) [[Home]]".to_string()))
            .parse(tokens)
            .unwrap();
        assert!(call.hook.is_none());
    }

    #[test]
    fn test_unterminated_call_fails() {
        assert!(parse_macro("(if: $x").is_err());
        assert!(parse_macro("(if: [x])").is_err());
    }

    #[test]
    fn test_macro_name_strips_delimiters() {
        assert_eq!(macro_name("(go-to:"), "go-to");
    }
}
