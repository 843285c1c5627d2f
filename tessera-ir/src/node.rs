//! The type node tree.

use serde::Serialize;

use crate::Classification;

/// One node of the type description tree.
///
/// Children keep their input order, which is also their emission order.
/// Sibling names are not required to be unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TypeNode {
    /// Identifier substituted for the name placeholder.
    pub name: String,
    /// Selects the template that renders this node.
    pub classification: String,
    /// Declared type, substituted for the type placeholder when non-empty.
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub type_ref: Option<String>,
    /// Nested nodes. Empty for leaves, never absent.
    pub children: Vec<TypeNode>,
}

impl TypeNode {
    /// Create a leaf node without a type.
    pub fn new(name: impl Into<String>, classification: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            classification: classification.into(),
            type_ref: None,
            children: Vec::new(),
        }
    }

    /// Set the declared type.
    pub fn with_type(mut self, type_ref: impl Into<String>) -> Self {
        self.type_ref = Some(type_ref.into());
        self
    }

    /// Append a child node.
    pub fn with_child(mut self, child: TypeNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append several child nodes, preserving their order.
    pub fn with_children(mut self, children: impl IntoIterator<Item = TypeNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Parsed classification of this node.
    pub fn kind(&self) -> Classification {
        Classification::parse(&self.classification)
    }

    /// The declared type, treating an empty string as absent.
    pub fn type_ref(&self) -> Option<&str> {
        self.type_ref.as_deref().filter(|t| !t.is_empty())
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Height of the subtree rooted here (a leaf has depth 1).
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 1usize)];
        while let Some((node, level)) = stack.pop() {
            max = max.max(level);
            stack.extend(node.children.iter().map(|c| (c, level + 1)));
        }
        max
    }

    /// Number of nodes in the subtree rooted here, including this one.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }
}
