//! Show command - Print a template's content.

use anyhow::Result;
use clap::Args;
use tracing::debug;

use super::TemplateDirArgs;

#[derive(Args)]
pub struct ShowArgs {
    /// Template id
    pub id: String,

    #[command(flatten)]
    pub dir: TemplateDirArgs,
}

pub fn execute(args: ShowArgs) -> Result<()> {
    let (templates, _) = args.dir.load()?;

    let Some(template) = templates.get(&args.id) else {
        let mut known: Vec<_> = templates.keys().map(String::as_str).collect();
        known.sort_unstable();
        anyhow::bail!(
            "No template with id '{}' (available: {})",
            args.id,
            known.join(", ")
        );
    };

    debug!("Showing template {} from {:?}", template.id, template.path);
    print!("{}", template.file_content);

    Ok(())
}
