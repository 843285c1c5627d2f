use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for tessera-manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the source content and filename so error factories don't need both
/// passed at every call site.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a syntax error for the type tree.
    pub fn syntax_error(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Syntax {
            src: self.named_source(),
            message: message.into(),
        })
    }

    /// Create an error for input without any content.
    pub fn empty_input_error(&self) -> Box<Error> {
        Box::new(Error::EmptyInput {
            filename: self.filename.clone(),
        })
    }

    /// Create a shape error for the node at `path`.
    pub fn shape_error(
        &self,
        path: impl Into<String>,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Shape {
            src: self.named_source(),
            span,
            path: path.into(),
            message: message.into(),
        })
    }

    /// Create a nesting depth error.
    pub fn too_deep_error(
        &self,
        location: impl Into<String>,
        limit: usize,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::TooDeep {
            src: self.named_source(),
            span,
            location: location.into(),
            limit,
        })
    }

    /// Create a configuration parse error from a toml error.
    pub fn config_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Config {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a configuration validation error.
    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("check the `input` and `templates` paths in tessera.toml"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse type tree: {message}")]
    #[diagnostic(code(tessera::syntax_error))]
    Syntax {
        #[source_code]
        src: NamedSource<String>,
        message: String,
    },

    #[error("type tree '{filename}' is empty")]
    #[diagnostic(
        code(tessera::empty_input),
        help("provide a JSON array of type nodes, or `[]` to generate an empty document")
    )]
    EmptyInput { filename: String },

    #[error("invalid type node at {path}: {message}")]
    #[diagnostic(
        code(tessera::invalid_node),
        help("`Name` and `Classification` must be strings; `Type` and `Children` are optional")
    )]
    Shape {
        #[source_code]
        src: NamedSource<String>,
        #[label("in this node")]
        span: Option<SourceSpan>,
        path: String,
        message: String,
    },

    #[error("type tree exceeds the maximum nesting depth of {limit} at {location}")]
    #[diagnostic(
        code(tessera::too_deep),
        help("raise `max_depth` in tessera.toml if this nesting is intentional")
    )]
    TooDeep {
        #[source_code]
        src: NamedSource<String>,
        #[label("nesting limit exceeded here")]
        span: Option<SourceSpan>,
        location: String,
        limit: usize,
    },

    #[error("failed to parse tessera.toml")]
    #[diagnostic(code(tessera::config_error))]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(tessera::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

impl Error {
    /// Returns true if the error means the type tree itself could not be read.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::Syntax { .. }
                | Error::EmptyInput { .. }
                | Error::Shape { .. }
                | Error::TooDeep { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_error_message() {
        let ctx = SourceContext::new("[{}]", "context.json");
        let err = ctx.shape_error("[0]", "missing required field `Name`", None);
        assert_eq!(
            err.to_string(),
            "invalid type node at [0]: missing required field `Name`"
        );
        assert!(err.is_input_error());
    }

    #[test]
    fn test_config_error_is_not_input_error() {
        let ctx = SourceContext::new("[generator", "tessera.toml");
        let toml_err = toml::from_str::<toml::Table>("[generator").unwrap_err();
        let err = ctx.config_error(toml_err);
        assert!(!err.is_input_error());
        assert_eq!(err.to_string(), "failed to parse tessera.toml");
    }
}
