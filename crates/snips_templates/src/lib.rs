//! # snips_templates
//!
//! Template and manifest loading for snips.
//!
//! A template root holds a `manifest.yaml` (or `.yml`, `.json`, `.toml`) and a
//! tree of template files. Loading produces every template keyed by id, each
//! with its raw content and its output file naming resolved against the
//! manifest defaults:
//!
//! ```text
//! templates/
//! ├── manifest.yaml          template.format, output.file_naming
//! ├── shared.tmpl
//! ├── types.tmpl
//! ├── types.tmpl.yaml        optional id / output_file_naming overrides
//! └── service/
//!     └── sub_service.tmpl
//! ```
//!
//! Rendering is left to the caller.
//!
//! ## Example
//!
//! ```rust,no_run
//! use snips_templates::load_templates;
//!
//! let (templates, manifest) = load_templates("templates").unwrap();
//! println!("format: {}", manifest.template.format);
//!
//! let types = &templates["types"];
//! println!("{}{}", types.output_file_naming.prefix, types.output_file_naming.extension);
//! ```

pub mod document;
pub mod error;
pub mod loader;
pub mod manifest;
pub mod template;

pub use error::{ErrorKind, TemplateError, TemplateResult};
pub use loader::{load_templates, TemplateLoader, TemplateMap};
pub use manifest::{FileNaming, Manifest, OutputSettings, TemplateFormat, TemplateSettings};
pub use template::{validate_id, FileNamingOverride, Template, TemplateMetadata};
