//! Error types for vpc-forge.
//!
//! Resource registration never fails: gateway attachment and route table
//! configuration only record definitions in a [`ProvisioningScope`]. Problems
//! such as colliding logical ids surface later, when the scope is synthesized
//! into a template, or when a layout document is loaded.
//!
//! [`ProvisioningScope`]: crate::scope::ProvisioningScope

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for vpc-forge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for vpc-forge.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Synthesis Errors
    // ========================================================================
    /// Logical id does not satisfy the CloudFormation naming rule.
    #[error("Invalid logical id '{0}': must be 1 to 255 alphanumeric characters")]
    InvalidLogicalId(String),

    /// Two definitions in the same scope share a logical id.
    #[error("Logical id '{0}' is defined more than once in the scope")]
    DuplicateLogicalId(String),

    /// A property references a logical id that the scope does not define.
    #[error("Resource '{resource}' references unknown logical id '{target}'")]
    DanglingReference {
        /// Resource holding the reference
        resource: String,
        /// Logical id that could not be resolved
        target: String,
    },

    /// Strict synthesis refused to emit a template carrying warnings.
    #[error("Synthesis produced {count} warning(s) in strict mode: {summary}")]
    StrictDiagnostics {
        /// Number of warnings
        count: usize,
        /// First warning message
        summary: String,
    },

    // ========================================================================
    // Layout Errors
    // ========================================================================
    /// Layout document is structurally valid but semantically wrong.
    #[error("Invalid layout: {0}")]
    Layout(String),

    /// Error parsing a layout file.
    #[error("Failed to parse layout '{path}': {message}")]
    LayoutParse {
        /// Path to the layout file
        path: PathBuf,
        /// Error message
        message: String,
    },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    // ========================================================================
    // IO Errors
    // ========================================================================
    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // ========================================================================
    // Other Errors
    // ========================================================================
    /// Generic error with source.
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
        /// Source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Creates a new dangling reference error.
    pub fn dangling_reference(resource: impl Into<String>, target: impl Into<String>) -> Self {
        Self::DanglingReference {
            resource: resource.into(),
            target: target.into(),
        }
    }

    /// Creates a new layout parse error.
    pub fn layout_parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::LayoutParse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns true if the error was raised while synthesizing a scope.
    pub fn is_synthesis_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidLogicalId(_)
                | Error::DuplicateLogicalId(_)
                | Error::DanglingReference { .. }
                | Error::StrictDiagnostics { .. }
        )
    }

    /// Returns the error code for CLI exit status.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidLogicalId(_)
            | Error::DuplicateLogicalId(_)
            | Error::DanglingReference { .. } => 2,
            Error::StrictDiagnostics { .. } => 3,
            Error::Layout(_) | Error::LayoutParse { .. } => 4,
            Error::Config(_) => 5,
            _ => 1,
        }
    }
}

/// Extension trait for adding context to errors.
pub trait ErrorContext<T> {
    /// Adds context to an error.
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Adds context with a closure that is only evaluated on error.
    fn with_context<F, S>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Other {
            message: message.into(),
            source: Some(Box::new(e)),
        })
    }

    fn with_context<F, S>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| Error::Other {
            message: f().into(),
            source: Some(Box::new(e)),
        })
    }
}
