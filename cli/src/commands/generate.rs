//! Generate command

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tasking_module::{Quoting, RenderConfig};

use crate::commands::ModuleArgs;

/// Arguments for `tasking generate`.
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub module: ModuleArgs,

    /// Value escaping (overrides TASKING_QUOTING)
    #[arg(long, value_enum)]
    pub quoting: Option<Quoting>,

    /// Refuse to generate while required options are missing or values do
    /// not fit their kind (overrides TASKING_STRICT)
    #[arg(long)]
    pub strict: bool,

    /// Render switch options by kind (overrides TASKING_TYPED_SWITCHES)
    #[arg(long)]
    pub typed_switches: bool,
}

#[derive(Debug, Serialize)]
struct GenerateOutput<'a> {
    module: &'a str,
    payload: &'a str,
    missing: Vec<String>,
}

/// Merge environment configuration with command-line overrides.
pub fn effective_config(args: &GenerateArgs, env: RenderConfig) -> RenderConfig {
    RenderConfig {
        quoting: args.quoting.unwrap_or(env.quoting),
        strict: args.strict || env.strict,
        typed_switches: args.typed_switches || env.typed_switches,
    }
}

/// Run the generate command.
pub fn run(args: &GenerateArgs, json: bool) -> Result<()> {
    let env = RenderConfig::from_env().context("invalid TASKING_* environment configuration")?;
    let config = effective_config(args, env);
    let module = args.module.load()?;
    let opts = config.render_options();

    let missing = module.validate();
    let payload = if config.strict {
        module.generate_checked(&opts)?
    } else {
        if !missing.is_empty() {
            tracing::warn!(
                module = %module.metadata().name,
                missing = ?missing,
                "generating payload with required options unset",
            );
        }
        module.generate_with(&opts)
    };

    if json {
        let out = GenerateOutput {
            module: &module.metadata().name,
            payload: &payload,
            missing,
        };
        let out = serde_json::to_string_pretty(&out).context("JSON serialization failed")?;
        println!("{out}");
    } else {
        println!("{payload}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(quoting: Option<Quoting>, strict: bool) -> GenerateArgs {
        GenerateArgs {
            module: ModuleArgs {
                module: Some("collection/sound_recorder".to_string()),
                manifest: None,
                set: Vec::new(),
            },
            quoting,
            strict,
            typed_switches: false,
        }
    }

    #[test]
    fn flags_override_environment() {
        let env = RenderConfig {
            quoting: Quoting::PowerShell,
            strict: false,
            typed_switches: true,
        };
        let cfg = effective_config(&args(Some(Quoting::Verbatim), true), env);
        assert_eq!(cfg.quoting, Quoting::Verbatim);
        assert!(cfg.strict);
        assert!(cfg.typed_switches);
    }

    #[test]
    fn environment_applies_without_flags() {
        let env = RenderConfig {
            quoting: Quoting::PowerShell,
            strict: true,
            typed_switches: false,
        };
        let cfg = effective_config(&args(None, false), env.clone());
        assert_eq!(cfg, env);
    }
}
