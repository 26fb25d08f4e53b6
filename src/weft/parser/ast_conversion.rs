//! Conversion from the intermediate tree to the final AST
//!
//! This is the single place where macro names matter: each call is looked up once in the
//! catalog. Unknown names become `UnknownMacro`, known names must match their pattern or the
//! whole parse fails with a macro shape error. Blank text runs are dropped here.

use crate::weft::ast::{HookContent, Macro, Node, Program, Text, UnknownMacro};
use crate::weft::catalog::MacroCatalog;
use crate::weft::error::{fragment_at, ParseError};

use super::combinators::extract_text;
use super::intermediate_ast::{HookWithSpans, MacroWithSpans, NodeWithSpans};

pub(crate) fn convert_program(
    source: &str,
    nodes: Vec<NodeWithSpans>,
    catalog: &MacroCatalog,
) -> Result<Program, ParseError> {
    Ok(Program::new(convert_nodes(source, nodes, catalog)?))
}

fn convert_nodes(
    source: &str,
    nodes: Vec<NodeWithSpans>,
    catalog: &MacroCatalog,
) -> Result<Vec<Node>, ParseError> {
    let mut converted = Vec::with_capacity(nodes.len());
    for node in nodes {
        match node {
            NodeWithSpans::Text(span) => {
                let text = Text::new(extract_text(source, &span));
                if !text.is_blank() {
                    converted.push(Node::Text(text));
                }
            }
            NodeWithSpans::Literal(literal) => converted.push(Node::Literal(literal)),
            NodeWithSpans::Link(link) => converted.push(Node::Link(link)),
            NodeWithSpans::Hook(hook) => {
                converted.push(Node::Hook(convert_hook(source, hook, catalog)?))
            }
            NodeWithSpans::Macro(call) => converted.push(convert_macro(source, call, catalog)?),
        }
    }
    Ok(converted)
}

fn convert_hook(
    source: &str,
    hook: HookWithSpans,
    catalog: &MacroCatalog,
) -> Result<HookContent, ParseError> {
    Ok(HookContent::new(convert_nodes(
        source,
        hook.children,
        catalog,
    )?))
}

fn convert_macro(
    source: &str,
    call: MacroWithSpans,
    catalog: &MacroCatalog,
) -> Result<Node, ParseError> {
    let pattern = catalog
        .check(&call.name, &call.arguments)
        .map_err(|mismatch| ParseError::MacroShape {
            name: call.name.clone(),
            position: mismatch.position,
            expected: mismatch.expected,
            actual: mismatch.actual,
            offset: call.lexeme.start,
            fragment: fragment_at(source, call.lexeme.start),
        })?
        .cloned();

    let hook = call
        .hook
        .map(|hook| convert_hook(source, hook, catalog))
        .transpose()?;

    match pattern {
        Some(pattern) => Ok(Node::Macro(Macro {
            name: call.name,
            keyword: call.arguments.keyword(),
            args: call.arguments.into_expressions(),
            pattern,
            hook,
        })),
        None => {
            tracing::debug!(name = %call.name, offset = call.lexeme.start, "unknown macro");
            Ok(Node::UnknownMacro(UnknownMacro {
                name: call.name,
                raw: source
                    .get(call.lexeme)
                    .unwrap_or_default()
                    .to_string(),
                hook,
            }))
        }
    }
}
