//! Options command

use anyhow::{Context, Result};
use serde::Serialize;
use tasking_module::OptionKind;

use crate::commands::ModuleArgs;
use crate::output::OutputContext;

#[derive(Debug, Serialize)]
struct OptionRow<'a> {
    name: &'a str,
    description: &'a str,
    required: bool,
    kind: OptionKind,
    value: &'a str,
}

/// Run the options command.
pub fn run(ctx: &OutputContext, args: &ModuleArgs, json: bool) -> Result<()> {
    let module = args.load()?;
    let rows: Vec<OptionRow<'_>> = module
        .options()
        .map(|(name, spec, value)| OptionRow {
            name,
            description: &spec.description,
            required: spec.required,
            kind: spec.kind,
            value,
        })
        .collect();

    if json {
        let out = serde_json::to_string_pretty(&rows).context("JSON serialization failed")?;
        println!("{out}");
        return Ok(());
    }

    ctx.header(&format!("{} options:", module.metadata().name));
    let width = rows.iter().map(|r| r.name.len()).max().unwrap_or(0);
    for row in &rows {
        let required = if row.required { "required" } else { "optional" };
        let value = if row.value.is_empty() { "-" } else { row.value };
        ctx.kv(
            &format!("{:<width$}", row.name),
            &format!("{required:<8}  {value:<16}  {}", row.description),
        );
    }
    let missing = module.validate();
    if !missing.is_empty() {
        ctx.warn(&format!("Required options without a value: {}", missing.join(", ")));
    }
    Ok(())
}
