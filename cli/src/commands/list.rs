//! List command

use anyhow::{Context, Result};
use serde::Serialize;
use tasking_module::builtin;

use crate::output::OutputContext;

/// One row of `tasking list`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ModuleEntry {
    path: &'static str,
    name: String,
    needs_admin: bool,
    opsec_safe: bool,
    min_runtime_version: String,
}

/// Run the list command.
pub fn run(ctx: &OutputContext, json: bool) -> Result<()> {
    let mut entries = Vec::new();
    for path in builtin::names() {
        let module = builtin::instantiate(path, None, Vec::<(String, String)>::new())?;
        let meta = module.metadata();
        entries.push(ModuleEntry {
            path,
            name: meta.name.clone(),
            needs_admin: meta.needs_admin,
            opsec_safe: meta.opsec_safe,
            min_runtime_version: meta.min_runtime_version.clone(),
        });
    }

    if json {
        let out = serde_json::to_string_pretty(&entries).context("JSON serialization failed")?;
        println!("{out}");
        return Ok(());
    }

    ctx.header("Modules:");
    for entry in &entries {
        let mut flags = Vec::new();
        if entry.needs_admin {
            flags.push("admin");
        }
        if entry.opsec_safe {
            flags.push("opsec-safe");
        }
        let suffix = if flags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", flags.join(", "))
        };
        ctx.kv(entry.path, &format!("{}{suffix}", entry.name));
    }
    Ok(())
}
