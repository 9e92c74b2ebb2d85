//! Command implementations

pub mod generate;
pub mod info;
pub mod list;
pub mod options;
pub mod version;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use tasking_module::{ModuleDescriptor, ModuleManifest, builtin};

use crate::host::CliHost;

/// Selects the module a command works on and seeds its options.
#[derive(Args, Debug, Clone)]
pub struct ModuleArgs {
    /// Built-in module path (see `tasking list`)
    #[arg(required_unless_present = "manifest")]
    pub module: Option<String>,

    /// Load the module from a YAML manifest instead
    #[arg(long, conflicts_with = "module")]
    pub manifest: Option<PathBuf>,

    /// Set an option value (repeatable)
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub set: Vec<(String, String)>,
}

impl ModuleArgs {
    /// Instantiate the selected module with the `--set` values.
    ///
    /// Unknown option names are ignored, as for any host-supplied parameters.
    pub fn load(&self) -> Result<ModuleDescriptor> {
        let params = self.set.iter().cloned();
        if let Some(path) = &self.manifest {
            let manifest = ModuleManifest::load(path)
                .with_context(|| format!("cannot load manifest {}", path.display()))?;
            return Ok(manifest.instantiate(Some(CliHost::handle()), params)?);
        }
        let Some(name) = &self.module else {
            bail!("no module selected");
        };
        Ok(builtin::instantiate(name, Some(CliHost::handle()), params)?)
    }
}

/// Parse `NAME=VALUE`, splitting at the first `=`. The value may be empty.
pub fn parse_assignment(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got '{s}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_splits_at_first_equals() {
        assert_eq!(
            parse_assignment("OutPath=C:\\a=b.wav"),
            Ok(("OutPath".to_string(), "C:\\a=b.wav".to_string()))
        );
        assert_eq!(parse_assignment("RecordTime="), Ok(("RecordTime".to_string(), String::new())));
    }

    #[test]
    fn assignment_requires_name_and_equals() {
        assert!(parse_assignment("RecordTime").is_err());
        assert!(parse_assignment("=5").is_err());
    }
}
