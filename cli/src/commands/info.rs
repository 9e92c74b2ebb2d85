//! Info command

use anyhow::{Context, Result};

use crate::commands::ModuleArgs;
use crate::output::OutputContext;

/// Run the info command.
pub fn run(ctx: &OutputContext, args: &ModuleArgs, json: bool) -> Result<()> {
    let module = args.load()?;
    let meta = module.metadata();

    if json {
        let out = serde_json::to_string_pretty(meta).context("JSON serialization failed")?;
        println!("{out}");
        return Ok(());
    }

    ctx.header(&meta.name);
    ctx.kv("Authors:    ", &meta.authors.join(", "));
    ctx.kv("Background: ", &meta.background.to_string());
    ctx.kv("Output ext: ", meta.output_extension.as_deref().unwrap_or("-"));
    ctx.kv("Needs admin:", &meta.needs_admin.to_string());
    ctx.kv("Opsec safe: ", &meta.opsec_safe.to_string());
    ctx.kv("Min runtime:", &meta.min_runtime_version);
    ctx.blank();
    ctx.text(&meta.description);
    if !meta.comments.is_empty() {
        ctx.blank();
        ctx.header("Comments:");
        for comment in &meta.comments {
            ctx.text(comment);
        }
    }
    Ok(())
}
