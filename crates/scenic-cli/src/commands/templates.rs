//! Implementation of the `scaffold-scene templates` command.

use serde::Serialize;

use scenic_core::domain::{ComponentKind, SOURCE_EXTENSION, TEMPLATES, TemplateSpec};

use crate::{
    cli::{ListFormat, TemplatesArgs},
    error::CliResult,
    output::OutputManager,
};

/// One row of the template listing.
#[derive(Debug, Serialize)]
struct TemplateRow {
    name: &'static str,
    kind: ComponentKind,
    file: String,
}

impl From<&TemplateSpec> for TemplateRow {
    fn from(spec: &TemplateSpec) -> Self {
        Self {
            name: spec.logical_name,
            kind: spec.kind,
            file: format!("<Name>{}.{}", spec.kind.suffix(), SOURCE_EXTENSION),
        }
    }
}

pub fn execute(args: TemplatesArgs, output: OutputManager) -> CliResult<()> {
    let rows: Vec<TemplateRow> = TEMPLATES.iter().map(TemplateRow::from).collect();

    // `--output-format json` upgrades the default table.
    let format = if output.is_json() && args.format == ListFormat::Table {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header("Scene templates (in creation order):")?;
            for row in &rows {
                output.print(&format!("  {:<14} {}", row.name, row.file))?;
            }
        }

        // Machine-readable formats go straight to stdout so pipes always
        // get them, even with --quiet.
        ListFormat::Json => output.json(&rows)?,

        ListFormat::List => {
            for row in &rows {
                println!("{}", row.name);
            }
        }

        ListFormat::Csv => {
            println!("name,kind,file");
            for row in &rows {
                println!("{},{},{}", row.name, row.kind.as_str(), row.file);
            }
        }
    }

    Ok(())
}
