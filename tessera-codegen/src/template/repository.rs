use indexmap::IndexMap;

use super::{TemplateKinds, TemplateSource};

/// Outcome of looking up the template for a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// The raw template text.
    Found(&'a str),
    /// No template is registered for the classification.
    Unrecognized,
    /// A template is registered but its resource could not be loaded.
    Unavailable {
        /// The resource that failed to load.
        resource: &'a str,
    },
}

impl<'a> Lookup<'a> {
    /// The template text, if one was found.
    pub fn text(self) -> Option<&'a str> {
        match self {
            Lookup::Found(text) => Some(text),
            Lookup::Unrecognized | Lookup::Unavailable { .. } => None,
        }
    }
}

/// Maps classifications to template text for one generation pass.
///
/// All registered resources are loaded when the repository is built; the
/// mapping is fixed for the rest of the pass.
#[derive(Debug, Clone)]
pub struct TemplateRepository {
    kinds: TemplateKinds,
    resources: IndexMap<String, Option<String>>,
}

impl TemplateRepository {
    /// Load every resource registered in `kinds` from `source`.
    ///
    /// Resources shared by several classifications are loaded once. Missing
    /// resources are remembered as unavailable rather than failing the load.
    pub fn load(source: &dyn TemplateSource, kinds: TemplateKinds) -> Self {
        let mut resources = IndexMap::new();
        for (_, resource) in kinds.iter() {
            if !resources.contains_key(resource) {
                resources.insert(resource.to_string(), source.load(resource));
            }
        }

        let repo = Self { kinds, resources };
        tracing::debug!(
            registered = repo.kinds.len(),
            unavailable = repo.unavailable().count(),
            "template repository loaded"
        );
        repo
    }

    /// Build a repository directly from `(classification, template)` pairs.
    ///
    /// Each classification doubles as its own resource name.
    pub fn from_templates<K, V>(templates: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut kinds = TemplateKinds::empty();
        let mut resources = IndexMap::new();
        for (classification, text) in templates {
            let classification = classification.into();
            kinds.register(classification.clone(), classification.clone());
            resources.insert(classification, Some(text.into()));
        }
        Self { kinds, resources }
    }

    /// Look up the template for a classification.
    pub fn lookup(&self, classification: &str) -> Lookup<'_> {
        let Some(resource) = self.kinds.resource(classification) else {
            return Lookup::Unrecognized;
        };
        match self.resources.get(resource) {
            Some(Some(text)) => Lookup::Found(text.as_str()),
            _ => Lookup::Unavailable { resource },
        }
    }

    /// The template text for a classification, or `None` for both an
    /// unrecognized classification and an unavailable resource.
    pub fn lookup_text(&self, classification: &str) -> Option<&str> {
        self.lookup(classification).text()
    }

    /// The registration table this repository was built from.
    pub fn kinds(&self) -> &TemplateKinds {
        &self.kinds
    }

    /// Registered `(classification, resource)` pairs whose resource failed to load.
    pub fn unavailable(&self) -> impl Iterator<Item = (&str, &str)> {
        self.kinds
            .iter()
            .filter(|(_, resource)| !matches!(self.resources.get(*resource), Some(Some(_))))
    }
}
