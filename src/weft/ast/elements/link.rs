//! Link element definition

use super::super::traits::AstNode;
use serde::Serialize;
use std::fmt;

/// A `[[text]]` or `[[text->target]]` navigation link.
///
/// Both sides are trimmed. Without an arrow the target is the text itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct Link {
    pub text: String,
    pub target: String,
}

impl Link {
    pub fn new(text: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            text: text.into().trim().to_string(),
            target: target.into().trim().to_string(),
        }
    }

    /// A link whose target is its own text.
    pub fn to_self(text: impl Into<String>) -> Self {
        let text = text.into().trim().to_string();
        Self {
            target: text.clone(),
            text,
        }
    }

    pub fn is_self_referential(&self) -> bool {
        self.text == self.target
    }
}

impl AstNode for Link {
    fn node_type(&self) -> &'static str {
        "Link"
    }

    fn display_label(&self) -> String {
        if self.is_self_referential() {
            self.text.clone()
        } else {
            format!("{} -> {}", self.text, self.target)
        }
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[[{}->{}]]", self.text, self.target)
    }
}
