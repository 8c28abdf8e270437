//! Typed parsing of YAML, JSON and TOML settings documents.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{TemplateError, TemplateResult};

/// Extensions accepted for settings documents, in lookup order.
pub const DOCUMENT_EXTENSIONS: [&str; 4] = ["yaml", "yml", "json", "toml"];

/// Syntax of a settings document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
    Toml,
}

impl DocumentFormat {
    /// Detect the syntax from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "yaml" | "yml" => Some(DocumentFormat::Yaml),
            "json" => Some(DocumentFormat::Json),
            "toml" => Some(DocumentFormat::Toml),
            _ => None,
        }
    }

    /// Parse `content` into `T`, returning the parser message on failure.
    pub fn parse<T: DeserializeOwned>(self, content: &str) -> Result<T, String> {
        match self {
            DocumentFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            DocumentFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            DocumentFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

/// Find the first existing `<stem>.<ext>` for the accepted extensions.
pub fn find_document(dir: &Path, stem: &str) -> TemplateResult<Option<PathBuf>> {
    Ok(find_documents(dir, stem)?.into_iter().next())
}

/// Every existing `<stem>.<ext>`, in lookup order.
///
/// A candidate that cannot be inspected (other than not existing) is an error.
pub fn find_documents(dir: &Path, stem: &str) -> TemplateResult<Vec<PathBuf>> {
    let mut found = Vec::new();
    for ext in DOCUMENT_EXTENSIONS {
        let path = dir.join(format!("{}.{}", stem, ext));
        match fs::metadata(&path) {
            Ok(metadata) if metadata.is_file() => found.push(path),
            Ok(_) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(TemplateError::io(path, e)),
        }
    }
    Ok(found)
}

/// Read and parse a document.
///
/// `invalid` builds the error for content that does not match the schema, so
/// callers can attribute it to the manifest or to template metadata.
pub fn read_document<T, F>(path: &Path, invalid: F) -> TemplateResult<T>
where
    T: DeserializeOwned,
    F: FnOnce(PathBuf, String) -> TemplateError,
{
    debug!("Reading settings document {:?}", path);

    let format = match DocumentFormat::from_path(path) {
        Some(format) => format,
        None => {
            return Err(invalid(
                path.to_path_buf(),
                "unsupported document extension".to_string(),
            ))
        }
    };

    let content = fs::read_to_string(path).map_err(|e| TemplateError::io(path, e))?;
    format
        .parse(&content)
        .map_err(|message| invalid(path.to_path_buf(), message))
}
