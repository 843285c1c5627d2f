use indexmap::IndexMap;
use tessera_ir::Classification;

/// Registration table mapping classifications to template resource names.
///
/// Starts out with the built-in classifications; hosts register more (or
/// override built-ins) from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateKinds {
    entries: IndexMap<String, String>,
}

impl TemplateKinds {
    /// A table holding the built-in classifications.
    pub fn new() -> Self {
        let entries = Classification::BUILTIN
            .iter()
            .filter_map(|kind| {
                kind.default_resource()
                    .map(|resource| (kind.as_str().to_string(), resource.to_string()))
            })
            .collect();
        Self { entries }
    }

    /// A table with no registrations at all.
    pub fn empty() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Register a classification, returning the resource it previously mapped to.
    pub fn register(
        &mut self,
        classification: impl Into<String>,
        resource: impl Into<String>,
    ) -> Option<String> {
        self.entries.insert(classification.into(), resource.into())
    }

    /// Builder form of [`TemplateKinds::register`].
    pub fn with(mut self, classification: impl Into<String>, resource: impl Into<String>) -> Self {
        self.register(classification, resource);
        self
    }

    /// Resource name registered for a classification. Matching is exact.
    pub fn resource(&self, classification: &str) -> Option<&str> {
        self.entries.get(classification).map(String::as_str)
    }

    /// Iterate over `(classification, resource)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of registered classifications.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TemplateKinds {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Extend<(K, V)> for TemplateKinds
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (classification, resource) in iter {
            self.register(classification, resource);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_registered() {
        let kinds = TemplateKinds::new();
        assert_eq!(kinds.resource("Class"), Some("class-template.tmpl"));
        assert_eq!(kinds.resource("Property"), Some("property-template.tmpl"));
        assert_eq!(kinds.resource("property"), None);
        assert_eq!(kinds.len(), 2);
    }

    #[test]
    fn test_register_extends_and_overrides() {
        let mut kinds = TemplateKinds::new();
        assert_eq!(kinds.register("Enum", "enum-template.tmpl"), None);
        assert_eq!(
            kinds.register("Class", "record-template.tmpl").as_deref(),
            Some("class-template.tmpl")
        );

        let pairs: Vec<_> = kinds.iter().collect();
        assert_eq!(
            pairs,
            [
                ("Class", "record-template.tmpl"),
                ("Property", "property-template.tmpl"),
                ("Enum", "enum-template.tmpl"),
            ]
        );
    }

    #[test]
    fn test_extend() {
        let mut kinds = TemplateKinds::empty();
        kinds.extend([("Struct", "struct.tmpl")]);
        assert_eq!(kinds.resource("Struct"), Some("struct.tmpl"));
        assert_eq!(kinds.resource("Class"), None);
    }
}
