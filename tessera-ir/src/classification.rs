//! Node classifications.

use std::fmt;

/// Discriminator that selects which template renders a node.
///
/// The built-in variants carry the resource name of their default template.
/// Any other string is kept as [`Classification::Other`]; whether it renders
/// depends on the registrations of the template repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Classification {
    /// A class declaration hosting nested members.
    Class,
    /// A property declaration, usually a leaf.
    Property,
    /// Any classification without a built-in template.
    Other(String),
}

impl Classification {
    /// All built-in classifications.
    pub const BUILTIN: [Classification; 2] = [Classification::Class, Classification::Property];

    /// Parse a classification string. Matching is exact and case-sensitive.
    pub fn parse(s: &str) -> Self {
        match s {
            "Class" => Classification::Class,
            "Property" => Classification::Property,
            other => Classification::Other(other.to_string()),
        }
    }

    /// Returns the classification as it appears in the input tree.
    pub fn as_str(&self) -> &str {
        match self {
            Classification::Class => "Class",
            Classification::Property => "Property",
            Classification::Other(s) => s,
        }
    }

    /// Resource name of the built-in template, if any.
    pub fn default_resource(&self) -> Option<&'static str> {
        match self {
            Classification::Class => Some("class-template.tmpl"),
            Classification::Property => Some("property-template.tmpl"),
            Classification::Other(_) => None,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
