//! Error types for template loading.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Coarse classification of a [`TemplateError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The template root does not exist or is not a directory.
    NotFound,
    /// A file or directory could not be read.
    Io,
    /// The manifest or template metadata is missing or malformed.
    Parse,
    /// Two templates resolved to the same identifier.
    Conflict,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::NotFound => "not found",
            ErrorKind::Io => "io",
            ErrorKind::Parse => "parse",
            ErrorKind::Conflict => "conflict",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while loading a template set.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template root not found: {0}")]
    RootNotFound(PathBuf),

    #[error("Template root is not a directory: {0}")]
    RootNotDirectory(PathBuf),

    #[error("No manifest found in template root {0}")]
    ManifestNotFound(PathBuf),

    #[error("Invalid manifest {path}: {message}")]
    InvalidManifest { path: PathBuf, message: String },

    #[error("Invalid template metadata {path}: {message}")]
    InvalidMetadata { path: PathBuf, message: String },

    #[error("Invalid template id derived from {path}: {message}")]
    InvalidTemplateId { path: PathBuf, message: String },

    #[error("Duplicate template id '{id}' in {first} and {second}")]
    DuplicateId {
        id: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk template tree: {0}")]
    Walk(#[from] walkdir::Error),
}

impl TemplateError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TemplateError::Io {
            path: path.into(),
            source,
        }
    }

    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TemplateError::RootNotFound(_) | TemplateError::RootNotDirectory(_) => {
                ErrorKind::NotFound
            }
            TemplateError::ManifestNotFound(_)
            | TemplateError::InvalidManifest { .. }
            | TemplateError::InvalidMetadata { .. }
            | TemplateError::InvalidTemplateId { .. } => ErrorKind::Parse,
            TemplateError::DuplicateId { .. } => ErrorKind::Conflict,
            TemplateError::Io { .. } | TemplateError::Walk(_) => ErrorKind::Io,
        }
    }
}
