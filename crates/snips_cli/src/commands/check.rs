//! Check command - Load a template set and report the outcome.

use anyhow::Result;
use clap::Args;
use tracing::info;

use snips_templates::TemplateFormat;

use super::TemplateDirArgs;

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub dir: TemplateDirArgs,
}

pub fn execute(args: CheckArgs) -> Result<()> {
    info!("Checking template set in {:?}", args.dir.dir);

    let (templates, manifest) = args.dir.load()?;

    println!(
        "✅ {} template(s), format {} (template files: *{})",
        templates.len(),
        manifest.template.format,
        manifest.template.template_extension()
    );

    if templates.is_empty() {
        println!("⚠️  No templates found");
    }
    println!("   supported formats: {}", supported_formats());

    Ok(())
}

fn supported_formats() -> String {
    TemplateFormat::all()
        .iter()
        .map(TemplateFormat::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_formats() {
        assert_eq!(supported_formats(), "Go, Mustache, Handlebars");
    }
}
