//! Property-based tests for the tokenizer and parser

use proptest::prelude::*;
use weft::{parse, tokenize, Node, Text};

proptest! {
    #[test]
    fn plain_text_parses_to_its_trimmed_self(source in "[A-Za-z0-9 .,!?\n]{0,60}") {
        let program = parse(&source).unwrap();
        if source.trim().is_empty() {
            prop_assert!(program.expressions.is_empty());
        } else {
            prop_assert_eq!(program.expressions, vec![Node::Text(Text::new(source.trim()))]);
        }
    }

    #[test]
    fn parsing_is_deterministic(source in "[a-z $\\[\\]()\":,0-9>+-]{0,40}") {
        prop_assert_eq!(parse(&source), parse(&source));
    }

    #[test]
    fn token_text_matches_its_span(source in "\\PC{0,64}") {
        let tokens = tokenize(&source).unwrap();
        for (token, span) in tokens {
            prop_assert_eq!(&source[span], token.text.as_str());
        }
    }

    #[test]
    fn text_nodes_are_never_blank(source in "[a-z \\[\\]()$:]{0,40}") {
        if let Ok(program) = parse(&source) {
            for node in &program.expressions {
                if let Some(text) = node.as_text() {
                    prop_assert!(!text.content.trim().is_empty());
                }
            }
        }
    }
}
