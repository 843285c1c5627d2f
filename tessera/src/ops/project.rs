//! Project resolution: configuration file plus command-line overrides.

use std::path::{Path, PathBuf};

use tessera_codegen::{DirectorySource, Renderer, TemplateKinds, TemplateRepository};
use tessera_manifest::{ConfigFile, TypeTree};

use crate::commands::ProjectArgs;

/// Everything one generation pass reads from, with paths fully resolved.
#[derive(Debug)]
pub struct Project {
    config: ConfigFile,
    input: PathBuf,
    templates: PathBuf,
}

impl Project {
    /// Resolve the project described by the command-line arguments.
    pub fn load(args: &ProjectArgs) -> tessera_manifest::Result<Self> {
        let config = ConfigFile::open_or_default(&args.config)?;
        let input = args.input.clone().unwrap_or_else(|| config.input_path());
        let templates = args
            .templates
            .clone()
            .unwrap_or_else(|| config.templates_dir());

        tracing::debug!(
            config = %config.path().display(),
            input = %input.display(),
            templates = %templates.display(),
            "project resolved"
        );

        Ok(Self {
            config,
            input,
            templates,
        })
    }

    /// Type tree path.
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Template directory.
    pub fn templates_dir(&self) -> &Path {
        &self.templates
    }

    /// Configured output path.
    pub fn output(&self) -> PathBuf {
        self.config.output_path()
    }

    /// Maximum nesting depth of type nodes.
    pub fn max_depth(&self) -> usize {
        self.config.config().generator.max_depth
    }

    /// Built-in classifications plus those registered in tessera.toml.
    pub fn kinds(&self) -> TemplateKinds {
        let mut kinds = TemplateKinds::new();
        kinds.extend(
            self.config
                .config()
                .templates
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str())),
        );
        kinds
    }

    /// Load all registered templates from the template directory.
    pub fn repository(&self) -> TemplateRepository {
        TemplateRepository::load(&DirectorySource::new(&self.templates), self.kinds())
    }

    /// Parse the type tree.
    pub fn tree(&self) -> tessera_manifest::Result<TypeTree> {
        TypeTree::open_with_limit(self.input(), self.max_depth())
    }

    /// A renderer over `repo` honoring the configured depth limit.
    pub fn renderer<'a>(&self, repo: &'a TemplateRepository) -> Renderer<'a> {
        Renderer::new(repo).max_depth(self.max_depth())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn args(config: PathBuf) -> ProjectArgs {
        ProjectArgs {
            config,
            input: None,
            templates: None,
        }
    }

    #[test]
    fn test_defaults_relative_to_config() {
        let temp = TempDir::new().unwrap();
        let project = Project::load(&args(temp.path().join("tessera.toml"))).unwrap();

        assert_eq!(project.input(), temp.path().join("context.json"));
        assert_eq!(project.templates_dir(), temp.path().join("templates"));
        assert_eq!(project.output(), temp.path().join("Source.cs"));
        assert_eq!(project.kinds().len(), 2);
    }

    #[test]
    fn test_overrides_win() {
        let temp = TempDir::new().unwrap();
        let project = Project::load(&ProjectArgs {
            config: temp.path().join("tessera.toml"),
            input: Some(PathBuf::from("other.json")),
            templates: Some(PathBuf::from("tmpl")),
        })
        .unwrap();

        assert_eq!(project.input(), Path::new("other.json"));
        assert_eq!(project.templates_dir(), Path::new("tmpl"));
    }

    #[test]
    fn test_configured_kinds() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tessera.toml");
        fs::write(&path, "[templates]\nEnum = \"enum-template.tmpl\"\n").unwrap();

        let project = Project::load(&args(path)).unwrap();
        assert_eq!(project.kinds().resource("Enum"), Some("enum-template.tmpl"));
        assert_eq!(
            project.kinds().resource("Class"),
            Some("class-template.tmpl")
        );
    }
}
