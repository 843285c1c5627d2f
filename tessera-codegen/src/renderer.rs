//! Recursive rendering of type nodes.

use tessera_ir::TypeNode;
use thiserror::Error;

use crate::{
    diagnostic::{Diagnostic, Diagnostics},
    placeholder::{Substitutions, substitute},
    template::{Lookup, TemplateRepository},
};

/// Default maximum nesting depth the renderer descends to.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Fatal rendering errors.
///
/// Template problems are never errors; they skip the node and leave a
/// diagnostic. The only fatal case is a tree too deep to be valid input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("type tree exceeds the maximum nesting depth of {limit} at '{location}'")]
    TooDeep { location: String, limit: usize },
}

/// Renders a node and its subtree using the templates of one repository.
///
/// For each node:
/// 1. Resolve the template for the node's classification. Without one, the
///    whole subtree renders as the empty string and siblings are unaffected.
/// 2. Render every child in order and concatenate the results.
/// 3. Substitute `{Name}`, `{Type}` (only when the type is non-empty) and
///    `{Children}` in one pass.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    templates: &'a TemplateRepository,
    max_depth: usize,
}

impl<'a> Renderer<'a> {
    /// Create a renderer with the default depth limit.
    pub fn new(templates: &'a TemplateRepository) -> Self {
        Self {
            templates,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the maximum nesting depth (a root node is at depth 1).
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The repository templates are resolved from.
    pub fn templates(&self) -> &'a TemplateRepository {
        self.templates
    }

    /// Render one node including all of its descendants.
    pub fn render(
        &self,
        node: &TypeNode,
        diagnostics: &mut Diagnostics,
    ) -> Result<String, RenderError> {
        self.render_at(node, &node.name, 1, diagnostics)
    }

    fn render_at(
        &self,
        node: &TypeNode,
        location: &str,
        depth: usize,
        diagnostics: &mut Diagnostics,
    ) -> Result<String, RenderError> {
        if depth > self.max_depth {
            return Err(RenderError::TooDeep {
                location: location.to_string(),
                limit: self.max_depth,
            });
        }

        let template = match self.templates.lookup(&node.classification) {
            Lookup::Found(template) => template,
            Lookup::Unrecognized => {
                tracing::debug!(
                    classification = %node.classification,
                    location,
                    "unrecognized classification, skipping node"
                );
                diagnostics.push(Diagnostic::unrecognized(&node.classification).at(location));
                return Ok(String::new());
            }
            Lookup::Unavailable { resource } => {
                tracing::warn!(
                    classification = %node.classification,
                    resource,
                    location,
                    "template unavailable, skipping node"
                );
                diagnostics
                    .push(Diagnostic::unavailable(&node.classification, resource).at(location));
                return Ok(String::new());
            }
        };

        let mut children = String::new();
        for child in &node.children {
            let child_location = format!("{}.{}", location, child.name);
            children.push_str(&self.render_at(child, &child_location, depth + 1, diagnostics)?);
        }

        Ok(substitute(
            template,
            &Substitutions {
                name: Some(&node.name),
                type_ref: node.type_ref(),
                children: Some(&children),
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::DiagnosticCode;

    fn repo() -> TemplateRepository {
        TemplateRepository::from_templates([
            ("Class", "public class {Name} { {Children} }"),
            ("Property", "public {Type} {Name} { get; set; }"),
        ])
    }

    fn age() -> TypeNode {
        TypeNode::new("Age", "Property").with_type("int")
    }

    fn render(repo: &TemplateRepository, node: &TypeNode) -> String {
        Renderer::new(repo)
            .render(node, &mut Diagnostics::new())
            .unwrap()
    }

    #[test]
    fn test_leaf_property() {
        assert_eq!(render(&repo(), &age()), "public int Age { get; set; }");
    }

    #[test]
    fn test_nested_class() {
        let person = TypeNode::new("Person", "Class").with_child(age());
        assert_eq!(
            render(&repo(), &person),
            "public class Person { public int Age { get; set; } }"
        );
    }

    #[test]
    fn test_leaf_class_has_empty_body() {
        let node = TypeNode::new("Empty", "Class");
        assert_eq!(render(&repo(), &node), "public class Empty {  }");
    }

    #[test]
    fn test_missing_type_passes_through() {
        let node = TypeNode::new("Age", "Property");
        assert_eq!(render(&repo(), &node), "public {Type} Age { get; set; }");

        let node = TypeNode::new("Age", "Property").with_type("");
        assert_eq!(render(&repo(), &node), "public {Type} Age { get; set; }");
    }

    #[test]
    fn test_unrecognized_subtree_is_empty() {
        let node = TypeNode::new("Color", "Enum").with_child(age());
        let mut diags = Diagnostics::new();
        let out = Renderer::new(&repo()).render(&node, &mut diags).unwrap();

        assert_eq!(out, "");
        assert_eq!(diags.len(), 1);
        let diag = diags.iter().next().unwrap();
        assert_eq!(diag.code, DiagnosticCode::UnrecognizedClassification);
        assert_eq!(diag.location.as_deref(), Some("Color"));
    }

    #[test]
    fn test_skipped_children_leave_siblings_intact() {
        let node = TypeNode::new("Person", "Class").with_children([
            age(),
            TypeNode::new("Mood", "Enum"),
            TypeNode::new("Height", "Property").with_type("double"),
        ]);
        assert_eq!(
            render(&repo(), &node),
            "public class Person { public int Age { get; set; }public double Height { get; set; } }"
        );
    }

    #[test]
    fn test_all_children_skipped_substitutes_empty() {
        let node = TypeNode::new("Person", "Class")
            .with_children([TypeNode::new("A", "Enum"), TypeNode::new("B", "Struct")]);
        assert_eq!(render(&repo(), &node), "public class Person {  }");
    }

    #[test]
    fn test_duplicate_children_both_emitted() {
        let node = TypeNode::new("P", "Class").with_children([age(), age()]);
        let out = render(&repo(), &node);
        assert_eq!(out.matches("public int Age { get; set; }").count(), 2);
    }

    #[test]
    fn test_template_without_children_slot_discards_children() {
        let repo = TemplateRepository::from_templates([
            ("Class", "class {Name};"),
            ("Property", "{Name}"),
        ]);
        let node = TypeNode::new("Person", "Class").with_child(age());
        assert_eq!(render(&repo, &node), "class Person;");
    }

    #[test]
    fn test_children_of_discarding_template_still_report() {
        let repo = TemplateRepository::from_templates([("Class", "class {Name};")]);
        let node = TypeNode::new("Person", "Class").with_child(TypeNode::new("X", "Enum"));
        let mut diags = Diagnostics::new();
        Renderer::new(&repo).render(&node, &mut diags).unwrap();
        assert_eq!(
            diags.iter().next().and_then(|d| d.location.as_deref()),
            Some("Person.X")
        );
    }

    #[test]
    fn test_empty_name_substitutes_empty() {
        let node = TypeNode::new("", "Property").with_type("int");
        assert_eq!(render(&repo(), &node), "public int  { get; set; }");
    }

    #[test]
    fn test_name_with_placeholder_is_literal() {
        let node = TypeNode::new("{Type}", "Property").with_type("int");
        assert_eq!(render(&repo(), &node), "public int {Type} { get; set; }");
    }

    #[test]
    fn test_depth_limit() {
        let b = TypeNode::new("B", "Class").with_child(age());
        let tree = TypeNode::new("A", "Class").with_child(b);
        let repo = repo();

        let within = Renderer::new(&repo)
            .max_depth(3)
            .render(&tree, &mut Diagnostics::new());
        assert!(within.is_ok());

        let err = Renderer::new(&repo)
            .max_depth(2)
            .render(&tree, &mut Diagnostics::new())
            .unwrap_err();
        assert_eq!(
            err,
            RenderError::TooDeep {
                location: "A.B.Age".into(),
                limit: 2
            }
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let repo = repo();
        let renderer = Renderer::new(&repo);
        let skipped = TypeNode::new("X", "Enum");
        let tree = TypeNode::new("Person", "Class").with_children([age(), skipped]);

        let mut first_diags = Diagnostics::new();
        let mut second_diags = Diagnostics::new();
        let first = renderer.render(&tree, &mut first_diags).unwrap();
        let second = renderer.render(&tree, &mut second_diags).unwrap();

        assert_eq!(first, second);
        assert_eq!(first_diags, second_diags);
    }
}
