//! Type tree parsing.
//!
//! The input is a JSON array of type nodes. Parsing is lenient in the ways
//! hand-authored files need: trailing commas and comments are accepted and
//! field names match case-insensitively. Anything that does not have the
//! shape of a type node is a fatal error for the whole pass.

mod file;
mod nesting;

use jsonc_parser::ParseOptions;
use miette::SourceSpan;
use serde_json::{Map, Value};
use tessera_ir::TypeNode;

pub use file::TypeTree;

use crate::{Error, Result, error::SourceContext};

/// Default maximum nesting depth of type nodes.
pub const MAX_DEPTH: usize = 64;

/// Bracket levels allowed per type-node level (node object + children array),
/// plus headroom for nested values in ignored fields.
const BRACKETS_PER_LEVEL: usize = 2;
const BRACKET_HEADROOM: usize = 16;

/// Parse a type tree with the default depth limit.
pub fn parse_tree(content: &str, filename: &str) -> Result<Vec<TypeNode>> {
    parse_tree_with_limit(content, filename, MAX_DEPTH)
}

/// Parse a type tree, rejecting nodes nested deeper than `max_depth`.
pub fn parse_tree_with_limit(
    content: &str,
    filename: &str,
    max_depth: usize,
) -> Result<Vec<TypeNode>> {
    let source = SourceContext::new(content, filename);

    let bracket_limit = max_depth
        .saturating_mul(BRACKETS_PER_LEVEL)
        .saturating_add(BRACKET_HEADROOM);
    if let Some(offset) = nesting::find_excess_nesting(content, bracket_limit) {
        return Err(source.too_deep_error(
            format!("offset {}", offset),
            max_depth,
            Some(SourceSpan::from((offset, 1))),
        ));
    }

    let value = jsonc_parser::parse_to_serde_value(content, &ParseOptions::default())
        .map_err(|e| source.syntax_error(e.to_string()))?;

    let roots = match value {
        None | Some(Value::Null) => return Err(source.empty_input_error()),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(source.shape_error(
                "$",
                format!("expected an array of type nodes, found {}", kind_of(&other)),
                None,
            ));
        }
    };

    let lower = Lowering {
        source: &source,
        max_depth,
    };
    roots
        .iter()
        .enumerate()
        .map(|(i, item)| lower.node(item, format!("[{}]", i), 1))
        .collect()
}

/// Converts parsed JSON values into type nodes, tracking the path for errors.
struct Lowering<'a> {
    source: &'a SourceContext,
    max_depth: usize,
}

impl Lowering<'_> {
    fn node(&self, value: &Value, path: String, depth: usize) -> Result<TypeNode> {
        if depth > self.max_depth {
            return Err(self.source.too_deep_error(path, self.max_depth, None));
        }

        let Value::Object(fields) = value else {
            return Err(self.source.shape_error(
                path,
                format!("expected an object, found {}", kind_of(value)),
                None,
            ));
        };

        let raw = RawNode::collect(fields);
        let name = self.string_field(raw.name, "Name", &path, None)?;
        let span = self.find_name_span(name.as_deref());
        let name = name.ok_or_else(|| self.missing(&path, "Name", span))?;
        let classification = self
            .string_field(raw.classification, "Classification", &path, span)?
            .ok_or_else(|| self.missing(&path, "Classification", span))?;
        let type_ref = self.string_field(raw.type_ref, "Type", &path, span)?;

        let children = match raw.children {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(i, child)| {
                    let child_path = format!("{}.Children[{}]", path, i);
                    self.node(child, child_path, depth + 1)
                })
                .collect::<Result<_>>()?,
            Some(other) => {
                return Err(self.source.shape_error(
                    &path,
                    format!(
                        "field `Children` must be an array, found {}",
                        kind_of(other)
                    ),
                    span,
                ));
            }
        };

        Ok(TypeNode {
            name,
            classification,
            type_ref,
            children,
        })
    }

    fn missing(&self, path: &str, field: &str, span: Option<SourceSpan>) -> Box<Error> {
        self.source
            .shape_error(path, format!("missing required field `{}`", field), span)
    }

    /// Read an optional string field; `null` counts as absent.
    fn string_field(
        &self,
        value: Option<&Value>,
        field: &str,
        path: &str,
        span: Option<SourceSpan>,
    ) -> Result<Option<String>> {
        match value {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(self.source.shape_error(
                path,
                format!(
                    "field `{}` must be a string, found {}",
                    field,
                    kind_of(other)
                ),
                span,
            )),
        }
    }

    /// Best-effort span of a node's name in the source.
    fn find_name_span(&self, name: Option<&str>) -> Option<SourceSpan> {
        let name = name.filter(|n| !n.is_empty())?;
        let quoted = format!("\"{}\"", name);
        self.source
            .src()
            .find(&quoted)
            .map(|pos| SourceSpan::from((pos, quoted.len())))
    }
}

/// The recognized fields of a node object, matched case-insensitively.
///
/// If a field is spelled several ways in one object, the spelling that comes
/// last in the document wins (the parsed map preserves document order).
/// Unrecognized fields are ignored.
#[derive(Default)]
struct RawNode<'a> {
    name: Option<&'a Value>,
    classification: Option<&'a Value>,
    type_ref: Option<&'a Value>,
    children: Option<&'a Value>,
}

impl<'a> RawNode<'a> {
    fn collect(fields: &'a Map<String, Value>) -> Self {
        let mut raw = RawNode::default();
        for (key, value) in fields {
            match key.to_ascii_lowercase().as_str() {
                "name" => raw.name = Some(value),
                "classification" => raw.classification = Some(value),
                "type" => raw.type_ref = Some(value),
                "children" => raw.children = Some(value),
                _ => {}
            }
        }
        raw
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
