//! CLI command definitions.
//!
//! Each subcommand loads a template set and reports on it. Nothing is
//! rendered or written.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use snips_templates::{Manifest, TemplateLoader, TemplateMap};

pub mod check;
pub mod list;
pub mod show;

/// snips - inspect code-generation template sets
#[derive(Parser)]
#[command(name = "snips")]
#[command(version, about = "snips - inspect code-generation template sets")]
#[command(long_about = r#"
snips loads a directory of code-generation templates together with its
manifest and reports what a generator would see.

COMMANDS:
  list   → List templates with their resolved output file naming
  show   → Print a template's content
  check  → Load a template set and report problems

EXIT CODES:
  0 - Success
  1 - General error
  2 - Template root not found
  3 - Manifest or metadata parse failure
  4 - Duplicate template id
  5 - IO error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List templates and their output file naming
    List(list::ListArgs),

    /// Print the content of one template
    Show(show::ShowArgs),

    /// Load a template set and report whether it is valid
    Check(check::CheckArgs),
}

/// Location of the template set, shared by every command.
#[derive(Args, Debug, Clone)]
pub struct TemplateDirArgs {
    /// Templates directory
    #[arg(short, long, env = "SNIPS_TEMPLATE_DIR", default_value = "templates")]
    pub dir: PathBuf,
}

impl TemplateDirArgs {
    /// Load the template set.
    pub fn load(&self) -> Result<(TemplateMap, Manifest)> {
        let loader = TemplateLoader::new(&self.dir);
        debug!("Loading template set from {:?}", loader.root());
        loader
            .load()
            .with_context(|| format!("Failed to load templates from {}", loader.root().display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_list() {
        let cli = Cli::try_parse_from(["snips", "list", "--dir", "fixtures", "--json"]).unwrap();
        match cli.command {
            Commands::List(args) => {
                assert_eq!(args.dir.dir, PathBuf::from("fixtures"));
                assert!(args.json);
            }
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn test_cli_rejects_verbose_and_quiet() {
        assert!(Cli::try_parse_from(["snips", "-v", "-q", "check"]).is_err());
    }
}
