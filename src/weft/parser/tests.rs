//! Parser tests over the full pipeline: tokenize, grammar, conversion.

use super::api::{parse, parse_with_catalog};
use crate::weft::ast::{
    ArithmeticOperator, ComparisonOperator, Expression, Keyword, Link, Literal, Node, Text,
};
use crate::weft::catalog::{ArgPattern, ArgType, MacroCatalog};
use crate::weft::error::{ErrorKind, ParseError};

fn single(source: &str) -> Node {
    let program = parse(source).unwrap_or_else(|e| panic!("{:?} failed: {}", source, e));
    assert_eq!(program.expressions.len(), 1, "{:#?}", program);
    program.expressions.into_iter().next().unwrap()
}

#[test]
fn test_empty_and_blank_input() {
    assert!(parse("").unwrap().is_empty());
    assert!(parse("   \n\t").unwrap().is_empty());
}

#[test]
fn test_plain_text_is_one_trimmed_node() {
    let node = single("  Hello, world. It's a fine day!  ");
    assert_eq!(node, Node::Text(Text::new("Hello, world. It's a fine day!")));
}

#[test]
fn test_top_level_text_absorbs_values_and_operators() {
    let node = single("You have $gold coins + \"change\" (really)");
    assert_eq!(
        node,
        Node::Text(Text::new("You have $gold coins + \"change\" (really)"))
    );
}

#[test]
fn test_set_macro() {
    let node = single("(set: $gold to 5)");
    let call = node.as_macro().unwrap();
    assert_eq!(call.name, "set");
    assert_eq!(call.keyword, Some(Keyword::To));
    assert_eq!(
        call.args,
        vec![
            Expression::Value(Literal::variable("gold")),
            Expression::Value(Literal::number(5.0)),
        ]
    );
    assert!(matches!(call.pattern, ArgPattern::Keyword { .. }));
}

#[test]
fn test_set_macro_with_arithmetic_value() {
    let node = single("(set: $gold to $gold - 3)");
    let call = node.as_macro().unwrap();
    assert_eq!(
        call.args[1],
        Expression::arithmetic(
            ArithmeticOperator::Subtract,
            Literal::variable("gold").into(),
            Literal::number(3.0).into(),
        )
    );
}

#[test]
fn test_link_macro() {
    let node = single("(link:\"A\"->\"B\")");
    let parts = node.as_macro().and_then(|call| call.link_parts());
    assert_eq!(parts, Some(("A".to_string(), "B".to_string())));
}

#[test]
fn test_links_between_text() {
    let program = parse("Go [[ Back -> Home ]] or [[Stay]].").unwrap();
    assert_eq!(
        program.expressions,
        vec![
            Node::Text(Text::new("Go")),
            Node::Link(Link::new("Back", "Home")),
            Node::Text(Text::new("or")),
            Node::Link(Link::new("Stay", "Stay")),
            Node::Text(Text::new(".")),
        ]
    );
}

#[test]
fn test_if_with_hook() {
    let node = single("(if: $score > 10)[You win!]");
    let call = node.as_macro().unwrap();
    assert_eq!(call.name, "if");
    assert_eq!(
        call.args,
        vec![Expression::comparison(
            ComparisonOperator::Greater,
            Literal::variable("score").into(),
            Literal::number(10.0).into(),
        )]
    );
    assert_eq!(call.hook.as_ref().map(|hook| hook.text()), Some("You win!".to_string()));
}

#[test]
fn test_nested_macro_in_hook() {
    let node = single("(history:)[You've visited (visited: \"Room\")]");
    let hook = node.as_macro().and_then(|call| call.hook.as_ref()).unwrap();
    assert_eq!(hook.children.len(), 2);
    assert_eq!(hook.children[0], Node::Text(Text::new("You've visited")));
    let nested = hook.children[1].as_macro().unwrap();
    assert_eq!(nested.name, "visited");
    assert_eq!(nested.args, vec![Expression::Value(Literal::string("Room"))]);
}

#[test]
fn test_hook_children_kinds() {
    let node = single("[Hi $name, [[Home]] [inner] \"quoted\"]");
    let hook = node.as_hook().unwrap();
    let kinds: Vec<&str> = hook
        .children
        .iter()
        .map(|child| crate::weft::ast::AstNode::node_type(child))
        .collect();
    assert_eq!(
        kinds,
        vec!["Text", "Variable", "Text", "Link", "Hook", "String"]
    );
}

#[test]
fn test_nested_hooks_closed_by_double_bracket() {
    let node = single("(if: $a)[(if: $b)[both]]");
    let outer = node.as_macro().and_then(|call| call.hook.as_ref()).unwrap();
    let inner = outer.children[0].as_macro().unwrap();
    assert_eq!(inner.hook.as_ref().map(|hook| hook.text()), Some("both".to_string()));
}

#[test]
fn test_hook_wrapping_a_link() {
    let node = single("(if: $x)[[[Home]]]");
    let hook = node.as_macro().and_then(|call| call.hook.as_ref()).unwrap();
    assert_eq!(hook.children, vec![Node::Link(Link::new("Home", "Home"))]);

    let node = single("[[[Home]]]");
    let hook = node.as_hook().unwrap();
    assert_eq!(hook.children, vec![Node::Link(Link::new("Home", "Home"))]);

    let node = single("(if: $x)[[[Go->Home]] now]");
    let hook = node.as_macro().and_then(|call| call.hook.as_ref()).unwrap();
    assert_eq!(
        hook.children,
        vec![
            Node::Link(Link::new("Go", "Home")),
            Node::Text(Text::new("now")),
        ]
    );
}

#[test]
fn test_deeply_nested_unclosed_hooks_fail_fast() {
    let source = format!("{}x", "(if: $a)[".repeat(30));
    let started = std::time::Instant::now();
    let err = parse(&source).unwrap_err();
    assert!(started.elapsed() < std::time::Duration::from_secs(5));
    assert_eq!(err.kind(), ErrorKind::NoMatchingRuleError);
    assert_eq!(err.offset(), source.len());
}

#[test]
fn test_deeply_nested_closed_hooks_parse() {
    let source = format!("{}x{}", "(if: $a)[".repeat(30), "]".repeat(30));
    let node = single(&source);
    let mut depth = 0;
    let mut current = &node;
    while let Some(child) = current.children().first() {
        depth += 1;
        current = child;
    }
    assert_eq!(depth, 30);
    assert_eq!(current, &Node::Text(Text::new("x")));
}

#[test]
fn test_unknown_macro_is_kept() {
    let node = single("(bogusMacro: 1, 2)");
    let call = node.as_unknown_macro().unwrap();
    assert_eq!(call.name, "bogusMacro");
    assert_eq!(call.raw, "(bogusMacro: 1, 2)");
}

#[test]
fn test_unknown_macro_with_unusual_arguments() {
    let node = single("(cycling-link: bind $x, \"a\", \"b\")[after]");
    let call = node.as_unknown_macro().unwrap();
    assert_eq!(call.raw, "(cycling-link: bind $x, \"a\", \"b\")");
    assert!(call.hook.is_some());
}

#[test]
fn test_macro_names_ignore_case_and_separators() {
    assert!(single("(goto: \"Hall\")").as_macro().is_some());
    assert!(single("(Go-To: \"Hall\")").as_macro().is_some());
    assert!(single("(elseif: true)").as_macro().is_some());
}

#[test]
fn test_link_macro_with_wrong_keyword() {
    let err = parse("(link: \"Next\" to \"Wrong\")").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MacroShapeError);
    match err {
        ParseError::MacroShape {
            name,
            expected,
            actual,
            offset,
            ..
        } => {
            assert_eq!(name, "link");
            assert_eq!(expected, "->");
            assert_eq!(actual, "to");
            assert_eq!(offset, 0);
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_set_with_non_variable_target() {
    let err = parse("Before (set: \"gold\" to 5)").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MacroShapeError);
    assert_eq!(err.offset(), 7);
    assert!(err.fragment().starts_with("(set:"));
    assert_eq!(
        err.to_string(),
        "macro (set:) argument 1: expected variable, found string literal"
    );
}

#[test]
fn test_known_macro_with_chained_operators_is_rejected() {
    let err = parse("(print: 1 + 2 + 3)").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MacroShapeError);
}

#[test]
fn test_shape_errors_inside_hooks_surface() {
    let err = parse("[(if:)[x]]").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MacroShapeError);
    assert_eq!(err.offset(), 1);
}

#[test]
fn test_stray_hook_close_is_trailing_input() {
    let err = parse("Some text ] more").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedTrailingInputError);
    assert_eq!(err.offset(), 10);
    assert_eq!(err.fragment(), "] more");
}

#[test]
fn test_stray_link_close_is_trailing_input() {
    let err = parse("]]").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedTrailingInputError);
    assert_eq!(err.offset(), 0);
}

#[test]
fn test_unterminated_constructs_hit_end_of_input() {
    for source in ["(if: $x", "[unclosed hook", "[[Home", "(set: $x to"] {
        let err = parse(source).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoMatchingRuleError, "{:?}", source);
        assert_eq!(err.offset(), source.len(), "{:?}", source);
        match err {
            ParseError::NoMatchingRule { found, .. } => assert_eq!(found, "end of input"),
            other => panic!("unexpected error {:?}", other),
        }
    }
}

#[test]
fn test_broken_construct_names_found_token() {
    let err = parse("ok (if: [x])").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoMatchingRuleError);
    match err {
        ParseError::NoMatchingRule { found, offset, .. } => {
            assert_eq!(found, "hook-open");
            assert_eq!(offset, 8);
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_reparse_is_identical() {
    let source = "(set: $x to 1)(if: $x is 1)[yes [[a->b]]] else (either: 1, 2)";
    assert_eq!(parse(source).unwrap(), parse(source).unwrap());
}

#[test]
fn test_custom_catalog_entry() {
    let catalog = MacroCatalog::builtin().clone().with_entry(
        "cycling-link",
        ArgPattern::Variadic {
            min: 2,
            arg: ArgType::StringLiteral,
        },
    );
    let program = parse_with_catalog("(cycling-link: \"a\", \"b\")", &catalog).unwrap();
    assert!(program.expressions[0].as_macro().is_some());

    let err = parse_with_catalog("(cycling-link: \"a\")", &catalog).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MacroShapeError);
}

#[test]
fn test_empty_catalog_makes_every_macro_unknown() {
    let program = parse_with_catalog("(set: \"x\" to 1)", &MacroCatalog::empty()).unwrap();
    assert!(program.expressions[0].as_unknown_macro().is_some());
}
