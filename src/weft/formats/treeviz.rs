//! Treeviz formatter for passage trees
//!
//! One line per node, nesting drawn with box connectors:
//!
//!     ├─ Text: Welcome back.
//!     ├─ Macro: (if: $score > 10)
//!     │ └─ Text: You win!
//!     └─ Link: Back -> Home
//!
//! Labels are truncated to 30 characters. A macro's attached hook is drawn as the macro's
//! children.

use crate::weft::ast::{AstNode, Node, Program};

const MAX_LABEL_CHARS: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(program: &Program) -> String {
    let mut result = String::new();
    append_children(&mut result, &program.expressions, "");
    result
}

fn append_node(result: &mut String, node: &Node, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    let display_label = truncate(&node.display_label(), MAX_LABEL_CHARS);

    result.push_str(&format!(
        "{}{} {}: {}\n",
        prefix,
        connector,
        node.node_type(),
        display_label
    ));

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    append_children(result, node.children(), &new_prefix);
}

fn append_children(result: &mut String, children: &[Node], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        append_node(result, child, prefix, is_last);
    }
}
