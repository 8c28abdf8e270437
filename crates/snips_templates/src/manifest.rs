//! Template set manifest definitions.
//!
//! A manifest sits at the root of a template set and declares the templating
//! syntax in use plus the default output naming policy inherited by every
//! template.

use std::fmt;
use std::path::{Path, PathBuf};

use glob::Pattern;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::document::{find_document, read_document};
use crate::error::{TemplateError, TemplateResult};

/// File stem of the manifest document at the template root.
pub const MANIFEST_STEM: &str = "manifest";

/// Templating syntax used by a template set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum TemplateFormat {
    /// Go `text/template` syntax. Baseline when the manifest is silent.
    #[default]
    Go,
    Mustache,
    Handlebars,
}

impl TemplateFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateFormat::Go => "Go",
            TemplateFormat::Mustache => "Mustache",
            TemplateFormat::Handlebars => "Handlebars",
        }
    }

    /// Suffix marking a file as a template when the manifest does not set one.
    pub fn default_file_extension(&self) -> &'static str {
        match self {
            TemplateFormat::Go => ".tmpl",
            TemplateFormat::Mustache => ".mustache",
            TemplateFormat::Handlebars => ".hbs",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            TemplateFormat::Go,
            TemplateFormat::Mustache,
            TemplateFormat::Handlebars,
        ]
    }
}

impl fmt::Display for TemplateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Output file naming policy.
///
/// In the manifest every field may be empty. On a loaded template every field
/// holds its resolved value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct FileNaming {
    /// Casing convention, e.g. `snake_case` or `camel_case`.
    #[serde(default)]
    pub style: String,
    /// Suffix of generated files, e.g. `.go`.
    #[serde(default)]
    pub extension: String,
    /// String prepended to generated file names.
    #[serde(default)]
    pub prefix: String,
}

/// `template` section of the manifest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct TemplateSettings {
    #[serde(default)]
    pub format: TemplateFormat,
    /// Suffix marking template files; defaults per format.
    #[serde(default)]
    pub file_extension: Option<String>,
    /// Glob patterns, relative to the root, of paths that are not templates.
    #[serde(default)]
    pub ignore: Vec<String>,
}

impl TemplateSettings {
    /// Effective template file suffix, always starting with a dot.
    pub fn template_extension(&self) -> String {
        match &self.file_extension {
            Some(ext) if ext.starts_with('.') => ext.clone(),
            Some(ext) => format!(".{}", ext),
            None => self.format.default_file_extension().to_string(),
        }
    }

    /// Compile the ignore patterns.
    pub fn ignore_patterns(&self) -> Result<Vec<Pattern>, String> {
        self.ignore
            .iter()
            .map(|raw| {
                Pattern::new(raw).map_err(|e| format!("invalid ignore pattern '{}': {}", raw, e))
            })
            .collect()
    }
}

/// `output` section of the manifest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct OutputSettings {
    #[serde(default)]
    pub file_naming: FileNaming,
}

/// Root configuration of a template set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub template: TemplateSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

impl Manifest {
    /// Locate the manifest document in a template root.
    pub fn locate(root: &Path) -> TemplateResult<PathBuf> {
        find_document(root, MANIFEST_STEM)?
            .ok_or_else(|| TemplateError::ManifestNotFound(root.to_path_buf()))
    }

    /// Read, parse and validate a manifest document.
    pub fn from_path(path: &Path) -> TemplateResult<Self> {
        debug!("Loading manifest from {:?}", path);
        let manifest: Manifest = read_document(path, |path, message| {
            TemplateError::InvalidManifest { path, message }
        })?;
        manifest.validate(path)?;
        Ok(manifest)
    }

    fn validate(&self, path: &Path) -> TemplateResult<()> {
        let invalid = |message: String| TemplateError::InvalidManifest {
            path: path.to_path_buf(),
            message,
        };

        if let Some(ext) = &self.template.file_extension {
            if ext.trim_start_matches('.').is_empty() {
                return Err(invalid(
                    "template.file_extension must not be empty".to_string(),
                ));
            }
        }
        self.template.ignore_patterns().map_err(invalid)?;

        Ok(())
    }
}
