//! Error types for button styling.

use std::path::PathBuf;

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving or configuring button styles.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A visual state outside `normal`, `hover` and `pressed`.
    ///
    /// This is a caller bug: states must be normalized before they reach the resolver.
    #[error("Invalid visual state '{name}': expected one of normal, hover, pressed")]
    InvalidState { name: String },

    /// A color that is neither a hex literal nor a known color name.
    #[error("Invalid color '{value}'")]
    InvalidColor { value: String },

    /// Invalid property value.
    #[error("Invalid value for property '{property}': {message}")]
    InvalidValue { property: String, message: String },

    /// Malformed theme file.
    #[error("Invalid theme configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// File I/O error.
    #[error("Failed to read theme '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an invalid state error.
    pub fn invalid_state(name: impl Into<String>) -> Self {
        Self::InvalidState { name: name.into() }
    }

    /// Create an invalid color error.
    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
        }
    }

    /// Create a value error.
    pub fn invalid_value(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            property: property.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error is a precondition violation rather than a configuration problem.
    pub fn is_precondition_violation(&self) -> bool {
        matches!(self, Self::InvalidState { .. })
    }
}
