//! List command - List templates with their resolved naming.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tracing::info;

use snips_templates::{Manifest, Template, TemplateMap};

use super::TemplateDirArgs;

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub dir: TemplateDirArgs,

    /// Print the template set as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct TemplateSetView<'a> {
    manifest: &'a Manifest,
    templates: Vec<&'a Template>,
}

pub fn execute(args: ListArgs) -> Result<()> {
    let (templates, manifest) = args.dir.load()?;
    info!("Listing {} template(s)", templates.len());

    if args.json {
        let view = TemplateSetView {
            manifest: &manifest,
            templates: sorted(&templates),
        };
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render_table(&templates));
    }

    Ok(())
}

fn sorted(templates: &TemplateMap) -> Vec<&Template> {
    let mut list: Vec<_> = templates.values().collect();
    list.sort_by(|a, b| a.id.cmp(&b.id));
    list
}

fn render_table(templates: &TemplateMap) -> String {
    let rows = sorted(templates);
    let id_width = rows.iter().map(|t| t.id.len()).max().unwrap_or(0).max(2);

    let mut out = format!(
        "{:<width$}  {:<12}  {:<10}  {:<8}  PATH\n",
        "ID",
        "STYLE",
        "EXTENSION",
        "PREFIX",
        width = id_width
    );
    for template in rows {
        let naming = &template.output_file_naming;
        out.push_str(&format!(
            "{:<width$}  {:<12}  {:<10}  {:<8}  {}\n",
            template.id,
            or_dash(&naming.style),
            or_dash(&naming.extension),
            or_dash(&naming.prefix),
            template.path.display(),
            width = id_width
        ));
    }
    out
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}
