//! Template loading functionality.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::document::{read_document, DocumentFormat};
use crate::error::{TemplateError, TemplateResult};
use crate::manifest::Manifest;
use crate::template::{validate_id, Template, TemplateMetadata};

/// Loaded templates keyed by id.
pub type TemplateMap = HashMap<String, Template>;

/// Load every template under `root` together with its manifest.
pub fn load_templates(root: impl Into<PathBuf>) -> TemplateResult<(TemplateMap, Manifest)> {
    TemplateLoader::new(root).load()
}

/// Template loader.
pub struct TemplateLoader {
    root: PathBuf,
}

impl TemplateLoader {
    /// Create a new template loader.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load the manifest and all templates from the root directory.
    ///
    /// Any failure aborts the whole load. Two templates resolving to the
    /// same id are rejected with [`TemplateError::DuplicateId`].
    pub fn load(&self) -> TemplateResult<(TemplateMap, Manifest)> {
        self.check_root()?;

        let manifest_path = Manifest::locate(&self.root)?;
        let manifest = Manifest::from_path(&manifest_path)?;

        let extension = manifest.template.template_extension();
        let ignore = manifest
            .template
            .ignore_patterns()
            .map_err(|message| TemplateError::InvalidManifest {
                path: manifest_path.clone(),
                message,
            })?;

        let mut templates = TemplateMap::new();

        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_hidden(e))
        {
            let entry = entry?;
            let path = entry.path();
            // Symlinked files count; `is_file` follows the link.
            if !path.is_file() {
                continue;
            }

            if path == manifest_path || is_sidecar(path, &extension) {
                continue;
            }

            let Some(stem) = template_stem(path, &extension) else {
                continue;
            };

            let relative = path.strip_prefix(&self.root).unwrap_or(path);
            if ignore.iter().any(|p| p.matches_path(relative)) {
                debug!("Ignoring template {:?}", relative);
                continue;
            }

            let template = self.load_template(path, relative, stem, &manifest)?;
            match templates.entry(template.id.clone()) {
                Entry::Occupied(existing) => {
                    return Err(TemplateError::DuplicateId {
                        id: template.id,
                        first: existing.get().path.clone(),
                        second: template.path,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(template);
                }
            }
        }

        info!(
            "Loaded {} template(s) from {:?} (format: {})",
            templates.len(),
            self.root,
            manifest.template.format
        );

        Ok((templates, manifest))
    }

    fn check_root(&self) -> TemplateResult<()> {
        let metadata = match fs::metadata(&self.root) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(TemplateError::RootNotFound(self.root.clone()));
            }
            Err(e) => return Err(TemplateError::io(&self.root, e)),
        };

        if !metadata.is_dir() {
            return Err(TemplateError::RootNotDirectory(self.root.clone()));
        }

        fs::read_dir(&self.root).map_err(|e| TemplateError::io(&self.root, e))?;

        Ok(())
    }

    /// Load a single template file.
    fn load_template(
        &self,
        path: &Path,
        relative: &Path,
        stem: &str,
        manifest: &Manifest,
    ) -> TemplateResult<Template> {
        debug!("Loading template from {:?}", path);
        let file_content = fs::read_to_string(path).map_err(|e| TemplateError::io(path, e))?;

        let metadata_path = TemplateMetadata::locate(path)?;
        let metadata = match &metadata_path {
            Some(metadata_path) => {
                let metadata: TemplateMetadata =
                    read_document(metadata_path, |path, message| {
                        TemplateError::InvalidMetadata { path, message }
                    })?;
                metadata
                    .validate()
                    .map_err(|message| TemplateError::InvalidMetadata {
                        path: metadata_path.clone(),
                        message,
                    })?;
                metadata
            }
            None => TemplateMetadata::default(),
        };

        let id = match metadata.id.clone() {
            Some(id) => id,
            None => {
                validate_id(stem).map_err(|message| TemplateError::InvalidTemplateId {
                    path: relative.to_path_buf(),
                    message,
                })?;
                stem.to_string()
            }
        };

        Ok(Template {
            id,
            path: relative.to_path_buf(),
            file_content,
            output_file_naming: metadata
                .output_file_naming
                .resolve(&manifest.output.file_naming),
        })
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map_or(false, |name| name.starts_with('.'))
}

/// File name without the template suffix, if the file is a template.
fn template_stem<'a>(path: &'a Path, extension: &str) -> Option<&'a str> {
    path.file_name()?
        .to_str()?
        .strip_suffix(extension)
        .filter(|stem| !stem.is_empty())
}

/// Whether `path` is the metadata document of an existing template file.
fn is_sidecar(path: &Path, extension: &str) -> bool {
    if DocumentFormat::from_path(path).is_none() {
        return false;
    }
    let owner = path.with_extension("");
    template_stem(&owner, extension).is_some() && owner.is_file()
}
