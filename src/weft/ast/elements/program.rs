//! Program: the root of every parse

use super::super::traits::AstNode;
use super::node::Node;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Program {
    pub expressions: Vec<Node>,
}

impl Program {
    pub fn new(expressions: Vec<Node>) -> Self {
        Self { expressions }
    }

    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }

    /// Total number of nodes, counting hook children recursively.
    pub fn node_count(&self) -> usize {
        fn count(nodes: &[Node]) -> usize {
            nodes.iter().map(|node| 1 + count(node.children())).sum()
        }
        count(&self.expressions)
    }
}

impl AstNode for Program {
    fn node_type(&self) -> &'static str {
        "Program"
    }

    fn display_label(&self) -> String {
        format!("{} expressions", self.expressions.len())
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Program({} expressions)", self.expressions.len())
    }
}
