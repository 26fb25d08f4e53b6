//! The node sum type shared by programs and hooks

use super::super::traits::AstNode;
use super::hook::HookContent;
use super::link::Link;
use super::literal::Literal;
use super::macro_call::{Macro, UnknownMacro};
use super::text::Text;
use serde::Serialize;
use std::fmt;

/// Anything that can appear in a program body or inside a hook.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Text(Text),
    /// A bare string or variable written inside a hook.
    Literal(Literal),
    Hook(HookContent),
    Link(Link),
    Macro(Macro),
    UnknownMacro(UnknownMacro),
}

impl Node {
    /// Nested nodes: hook children, or the children of a macro's attached hook.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Hook(hook) => &hook.children,
            Node::Macro(Macro {
                hook: Some(hook), ..
            })
            | Node::UnknownMacro(UnknownMacro {
                hook: Some(hook), ..
            }) => &hook.children,
            _ => &[],
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Node::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_macro(&self) -> Option<&Macro> {
        match self {
            Node::Macro(call) => Some(call),
            _ => None,
        }
    }

    pub fn as_unknown_macro(&self) -> Option<&UnknownMacro> {
        match self {
            Node::UnknownMacro(call) => Some(call),
            _ => None,
        }
    }

    pub fn as_hook(&self) -> Option<&HookContent> {
        match self {
            Node::Hook(hook) => Some(hook),
            _ => None,
        }
    }
}

impl AstNode for Node {
    fn node_type(&self) -> &'static str {
        match self {
            Node::Text(n) => n.node_type(),
            Node::Literal(n) => n.node_type(),
            Node::Hook(n) => n.node_type(),
            Node::Link(n) => n.node_type(),
            Node::Macro(n) => n.node_type(),
            Node::UnknownMacro(n) => n.node_type(),
        }
    }

    fn display_label(&self) -> String {
        match self {
            Node::Text(n) => n.display_label(),
            Node::Literal(n) => n.display_label(),
            Node::Hook(n) => n.display_label(),
            Node::Link(n) => n.display_label(),
            Node::Macro(n) => n.display_label(),
            Node::UnknownMacro(n) => n.display_label(),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text(n) => write!(f, "{}", n),
            Node::Literal(n) => write!(f, "{}", n),
            Node::Hook(n) => write!(f, "{}", n),
            Node::Link(n) => write!(f, "{}", n),
            Node::Macro(n) => write!(f, "{}", n),
            Node::UnknownMacro(n) => write!(f, "{}", n),
        }
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}

impl From<Link> for Node {
    fn from(link: Link) -> Self {
        Node::Link(link)
    }
}

impl From<HookContent> for Node {
    fn from(hook: HookContent) -> Self {
        Node::Hook(hook)
    }
}

impl From<Macro> for Node {
    fn from(call: Macro) -> Self {
        Node::Macro(call)
    }
}

impl From<UnknownMacro> for Node {
    fn from(call: UnknownMacro) -> Self {
        Node::UnknownMacro(call)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_of_macro_hook() {
        let hook = HookContent::new(vec![Text::new("You win!").into()]);
        let node = Node::UnknownMacro(UnknownMacro {
            name: "custom".to_string(),
            raw: "(custom:)".to_string(),
            hook: Some(hook),
        });
        assert_eq!(node.children().len(), 1);
        assert_eq!(node.children()[0].as_text().map(|t| t.content.as_str()), Some("You win!"));
    }

    #[test]
    fn test_untagged_serialization_keeps_inner_tag() {
        let json = serde_json::to_value(Node::from(Link::new("Back", "Home"))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "Link", "text": "Back", "target": "Home"})
        );
    }
}
