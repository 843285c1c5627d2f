//! Project configuration (`tessera.toml`).

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use indexmap::IndexMap;
use miette::SourceSpan;
use serde::Deserialize;

use crate::{Error, Result, error::SourceContext, tree::MAX_DEPTH};

/// Default configuration file name.
pub const CONFIG_FILE: &str = "tessera.toml";

/// Root schema for tessera.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Where the generator reads from and writes to.
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Extra classification → template resource registrations.
    #[serde(default)]
    pub templates: IndexMap<String, String>,
}

/// The `[generator]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Type tree file.
    #[serde(default = "default_input")]
    pub input: PathBuf,
    /// Directory holding the template resources.
    #[serde(default = "default_templates")]
    pub templates: PathBuf,
    /// Path of the emitted document.
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Maximum nesting depth of type nodes.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_input() -> PathBuf {
    PathBuf::from("context.json")
}

fn default_templates() -> PathBuf {
    PathBuf::from("templates")
}

fn default_output() -> PathBuf {
    PathBuf::from("Source.cs")
}

fn default_max_depth() -> usize {
    MAX_DEPTH
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            templates: default_templates(),
            output: default_output(),
            max_depth: default_max_depth(),
        }
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, CONFIG_FILE)
    }
}

/// Parse a configuration from content with the given filename for error reporting.
pub fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let source = SourceContext::new(content, filename);
    let config: Config = toml::from_str(content).map_err(|e| source.config_error(e))?;
    validate_config(&config, &source)?;
    Ok(config)
}

fn validate_config(config: &Config, source: &SourceContext) -> Result<()> {
    if config.generator.max_depth == 0 {
        return Err(source.validation_error(
            "`max_depth` must be at least 1",
            find_span(source.src(), "max_depth"),
        ));
    }

    for (classification, resource) in &config.templates {
        if classification.is_empty() {
            return Err(source.validation_error(
                "classification must not be empty",
                None,
            ));
        }
        if resource.is_empty() {
            return Err(source.validation_error(
                format!(
                    "template resource for '{}' must not be empty",
                    classification
                ),
                find_span(source.src(), classification),
            ));
        }
    }

    Ok(())
}

/// Find the first occurrence of a key in the source.
fn find_span(src: &str, key: &str) -> Option<SourceSpan> {
    src.find(key).map(|pos| SourceSpan::from((pos, key.len())))
}

/// A configuration file with the directory its relative paths resolve against.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: PathBuf,
    config: Config,
}

impl ConfigFile {
    /// Open and parse a configuration file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let config = parse_config(&content, &path.display().to_string())?;
        Ok(Self { path, config })
    }

    /// Open a configuration file, falling back to defaults if it doesn't exist.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::open(path)
        } else {
            Ok(Self {
                path: path.to_path_buf(),
                config: Config::default(),
            })
        }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the parsed configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Directory relative paths are resolved against.
    pub fn base_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Resolve a configured path against the config file's directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir().join(path)
        }
    }

    /// Resolved type tree path.
    pub fn input_path(&self) -> PathBuf {
        self.resolve(&self.config.generator.input)
    }

    /// Resolved template directory.
    pub fn templates_dir(&self) -> PathBuf {
        self.resolve(&self.config.generator.templates)
    }

    /// Resolved output path.
    pub fn output_path(&self) -> PathBuf {
        self.resolve(&self.config.generator.output)
    }
}
