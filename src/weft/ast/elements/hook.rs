//! Hook element definition
//!
//! A hook is a `[...]` span of content. It stands alone or hangs off the macro written right
//! before it, e.g. `(if: $x)[shown when $x is truthy]`.

use super::super::traits::AstNode;
use super::node::Node;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Hook")]
pub struct HookContent {
    pub children: Vec<Node>,
}

impl HookContent {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    /// Concatenated text of the direct text children, separated by single spaces.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|child| match child {
                Node::Text(text) => Some(text.content.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl AstNode for HookContent {
    fn node_type(&self) -> &'static str {
        "Hook"
    }

    fn display_label(&self) -> String {
        match self.children.len() {
            1 => "1 item".to_string(),
            n => format!("{} items", n),
        }
    }
}

impl fmt::Display for HookContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hook({} children)", self.children.len())
    }
}
