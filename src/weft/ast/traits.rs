//! AST traits - Common interfaces for uniform node access

/// Common interface for all AST nodes
pub trait AstNode {
    /// Variant name, matching the serialized `"type"` discriminant.
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;
}
