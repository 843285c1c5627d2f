//! Advisory diagnostics collected during a generation pass.
//!
//! Diagnostics never abort a pass. They let the host tell template authors
//! that part of the tree produced no output, and why.

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Something the author should fix, e.g. a missing template file.
    Warning,
    /// Informational message about the generation pass.
    Info,
}

impl Severity {
    /// Returns true if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// What a diagnostic is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    /// No template is registered for the node's classification.
    UnrecognizedClassification,
    /// A template is registered but its resource could not be loaded.
    TemplateUnavailable,
}

impl DiagnosticCode {
    /// Returns the code as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCode::UnrecognizedClassification => "unrecognized-classification",
            DiagnosticCode::TemplateUnavailable => "template-unavailable",
        }
    }
}

/// A diagnostic message from a generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// What kind of problem this is.
    pub code: DiagnosticCode,
    /// The diagnostic message.
    pub message: String,
    /// Optional location in the type tree (e.g., "Person.Age").
    pub location: Option<String>,
}

impl Diagnostic {
    /// A node whose classification has no registered template.
    pub fn unrecognized(classification: &str) -> Self {
        Self {
            severity: Severity::Info,
            code: DiagnosticCode::UnrecognizedClassification,
            message: format!(
                "no template registered for classification '{}', node skipped",
                classification
            ),
            location: None,
        }
    }

    /// A node whose template resource could not be loaded.
    pub fn unavailable(classification: &str, resource: &str) -> Self {
        Self {
            severity: Severity::Warning,
            code: DiagnosticCode::TemplateUnavailable,
            message: format!(
                "template '{}' for classification '{}' could not be loaded, node skipped",
                resource, classification
            ),
            location: None,
        }
    }

    /// Add a location to this diagnostic.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}

/// Diagnostics collected during one pass, in the order they were raised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    /// Returns true if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of recorded diagnostics.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.items.iter().any(|d| d.severity.is_warning())
    }

    /// Count the number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter().filter(|d| d.severity.is_warning())
    }

    /// Get all diagnostics with the given code.
    pub fn with_code(&self, code: DiagnosticCode) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter().filter(move |d| d.code == code)
    }

    /// Iterate over all diagnostics.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
