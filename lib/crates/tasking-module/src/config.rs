use serde::Deserialize;

use crate::render::{Quoting, RenderOptions};

/// Environment prefix for [`RenderConfig::from_env`].
pub const ENV_PREFIX: &str = "TASKING_";

/// Rendering defaults a host applies to every generated payload.
///
/// Loaded from `TASKING_*` environment variables:
///   - `TASKING_QUOTING` (`verbatim` | `powershell`, default `verbatim`)
///   - `TASKING_STRICT`  (`true` | `false`, default `false`)
///   - `TASKING_TYPED_SWITCHES` (`true` | `false`, default `false`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RenderConfig {
    /// Escaping applied to option values.
    #[serde(default)]
    pub quoting: Quoting,

    /// Refuse to render while required options are missing or values do not
    /// fit their kind.
    #[serde(default)]
    pub strict: bool,

    /// Render switch options by kind.
    #[serde(default)]
    pub typed_switches: bool,
}

impl RenderConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed(ENV_PREFIX).from_env()
    }

    /// Load from an explicit set of variables (prefixed names).
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX).from_iter(vars)
    }

    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            quoting: self.quoting,
            typed_switches: self.typed_switches,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn defaults_are_lenient() {
        let cfg = RenderConfig::from_vars(vars(&[])).unwrap();
        assert_eq!(cfg, RenderConfig::default());
        assert_eq!(cfg.render_options(), RenderOptions::default());
    }

    #[test]
    fn reads_prefixed_variables() {
        let cfg = RenderConfig::from_vars(vars(&[
            ("TASKING_QUOTING", "powershell"),
            ("TASKING_STRICT", "true"),
            ("TASKING_TYPED_SWITCHES", "true"),
            ("OTHER_STRICT", "false"),
        ]))
        .unwrap();
        assert_eq!(cfg.quoting, Quoting::PowerShell);
        assert!(cfg.strict);
        assert_eq!(cfg.render_options(), RenderOptions::hardened());
    }

    #[test]
    fn rejects_unknown_quoting() {
        let err = RenderConfig::from_vars(vars(&[("TASKING_QUOTING", "bash")])).unwrap_err();
        assert!(err.to_string().contains("bash") || err.to_string().contains("variant"));
    }
}
