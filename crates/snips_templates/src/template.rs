//! Loaded templates and their per-template metadata.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::document::find_documents;
use crate::error::{TemplateError, TemplateResult};
use crate::manifest::FileNaming;

/// Check a template id: non-empty, no whitespace, no path separators.
pub fn validate_id(id: &str) -> Result<(), String> {
    if id.is_empty() {
        return Err("id must not be empty".to_string());
    }
    if id.chars().any(|c| c.is_whitespace() || c == '/' || c == '\\') {
        return Err(format!(
            "id '{}' must not contain whitespace or path separators",
            id
        ));
    }
    Ok(())
}

/// One loaded template.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Template {
    /// Unique key within a load result.
    pub id: String,
    /// Location relative to the template root.
    pub path: PathBuf,
    /// File text exactly as read.
    pub file_content: String,
    /// Naming policy after inheriting unset fields from the manifest.
    pub output_file_naming: FileNaming,
}

/// Naming fields a template may override individually.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct FileNamingOverride {
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub extension: Option<String>,
    #[serde(default)]
    pub prefix: Option<String>,
}

impl FileNamingOverride {
    /// Merge over `defaults`, field by field.
    pub fn resolve(&self, defaults: &FileNaming) -> FileNaming {
        FileNaming {
            style: self.style.clone().unwrap_or_else(|| defaults.style.clone()),
            extension: self
                .extension
                .clone()
                .unwrap_or_else(|| defaults.extension.clone()),
            prefix: self.prefix.clone().unwrap_or_else(|| defaults.prefix.clone()),
        }
    }
}

/// Sidecar settings stored next to a template file as `<file>.yaml`
/// (or `.yml`, `.json`, `.toml`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct TemplateMetadata {
    /// Explicit identifier replacing the one derived from the file name.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub output_file_naming: FileNamingOverride,
}

impl TemplateMetadata {
    /// Locate the sidecar document for a template file, if any.
    ///
    /// More than one sidecar for the same template is rejected.
    pub fn locate(template_path: &Path) -> TemplateResult<Option<PathBuf>> {
        let (Some(dir), Some(name)) = (
            template_path.parent(),
            template_path.file_name().and_then(|n| n.to_str()),
        ) else {
            return Ok(None);
        };

        let mut found = find_documents(dir, name)?;
        if found.len() > 1 {
            let names: Vec<_> = found.iter().map(|p| p.display().to_string()).collect();
            return Err(TemplateError::InvalidMetadata {
                path: found.swap_remove(1),
                message: format!("ambiguous template metadata: {}", names.join(", ")),
            });
        }
        Ok(found.pop())
    }

    /// Check the explicit id, if set.
    pub fn validate(&self) -> Result<(), String> {
        match &self.id {
            Some(id) => validate_id(id),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn defaults() -> FileNaming {
        FileNaming {
            style: "snake_case".to_string(),
            extension: ".go".to_string(),
            prefix: String::new(),
        }
    }

    #[test]
    fn test_resolve_inherits_unset_fields() {
        let naming = FileNamingOverride {
            extension: Some(".any".to_string()),
            ..Default::default()
        }
        .resolve(&defaults());

        assert_eq!(naming.style, "snake_case");
        assert_eq!(naming.extension, ".any");
        assert_eq!(naming.prefix, "");
    }

    #[test]
    fn test_resolve_empty_override_wins() {
        let naming = FileNamingOverride {
            extension: Some(String::new()),
            ..Default::default()
        }
        .resolve(&defaults());

        assert_eq!(naming.extension, "");
    }

    #[test]
    fn test_metadata_parse() {
        let metadata: TemplateMetadata = serde_yaml::from_str(
            r#"
id: types
output_file_naming:
  style: camel_case
  prefix: qs_
"#,
        )
        .unwrap();
        assert_eq!(metadata.id.as_deref(), Some("types"));
        assert_eq!(metadata.output_file_naming.style.as_deref(), Some("camel_case"));
        assert_eq!(metadata.output_file_naming.extension, None);
        assert!(metadata.validate().is_ok());
    }

    #[test]
    fn test_metadata_invalid_id() {
        let metadata = TemplateMetadata {
            id: Some("sub service".to_string()),
            ..Default::default()
        };
        assert!(metadata.validate().is_err());

        let metadata = TemplateMetadata {
            id: Some(String::new()),
            ..Default::default()
        };
        assert!(metadata.validate().is_err());
    }

    #[test]
    fn test_locate_sidecar() {
        let temp = tempdir().unwrap();
        let template = temp.path().join("types.tmpl");
        fs::write(&template, "types template\n").unwrap();
        assert!(TemplateMetadata::locate(&template).unwrap().is_none());

        fs::write(temp.path().join("types.tmpl.toml"), "id = \"types\"\n").unwrap();
        assert_eq!(
            TemplateMetadata::locate(&template).unwrap(),
            Some(temp.path().join("types.tmpl.toml"))
        );
    }

    #[test]
    fn test_locate_ambiguous_sidecar() {
        let temp = tempdir().unwrap();
        let template = temp.path().join("types.tmpl");
        fs::write(&template, "types template\n").unwrap();
        fs::write(temp.path().join("types.tmpl.yaml"), "id: types\n").unwrap();
        fs::write(temp.path().join("types.tmpl.json"), r#"{"id": "types"}"#).unwrap();

        let err = TemplateMetadata::locate(&template).unwrap_err();
        assert!(matches!(err, TemplateError::InvalidMetadata { .. }));
        let message = err.to_string();
        assert!(message.contains("types.tmpl.yaml"), "{}", message);
        assert!(message.contains("types.tmpl.json"), "{}", message);
    }

    #[test]
    fn test_validate_id() {
        assert!(validate_id("sub_service").is_ok());
        assert!(validate_id("types.v2").is_ok());
        assert!(validate_id("").is_err());
        assert!(validate_id("sub service").is_err());
        assert!(validate_id("service/types").is_err());
    }
}
