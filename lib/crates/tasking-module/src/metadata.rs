// lib/crates/tasking-module/src/metadata.rs

use serde::{Deserialize, Serialize};

/// Descriptive metadata of a module. Fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleMetadata {
    /// Name shown in module menus (e.g. `"Start-SoundRecorder"`).
    pub name: String,
    #[serde(default)]
    pub authors: Vec<String>,
    pub description: String,
    /// The payload has to run as a background job on the agent.
    #[serde(default)]
    pub background: bool,
    /// File extension the agent output is saved as.
    #[serde(default)]
    pub output_extension: Option<String>,
    /// The payload needs elevated privileges.
    #[serde(default)]
    pub needs_admin: bool,
    /// The payload does not touch disk and is reasonably quiet.
    #[serde(default)]
    pub opsec_safe: bool,
    /// Minimum runtime version the payload needs on the agent.
    pub min_runtime_version: String,
    /// References and other comments.
    #[serde(default)]
    pub comments: Vec<String>,
}

impl ModuleMetadata {
    /// Returns `true` when an agent reporting `version` can run the module.
    ///
    /// Runtime versions are padded or truncated to `major.minor.patch`, so
    /// `"5.1"` satisfies `"2"` and `"5.1.19041.1"` satisfies `"5.1"`.
    /// Versions that do not parse never satisfy the gate.
    #[must_use]
    pub fn supports_runtime(&self, version: &str) -> bool {
        match (runtime_version(version), runtime_version(&self.min_runtime_version)) {
            (Some(agent), Some(min)) => agent >= min,
            _ => false,
        }
    }
}

/// Parse a dotted runtime version (`"2"`, `"5.1"`, `"5.1.19041.1"`) as semver.
fn runtime_version(v: &str) -> Option<semver::Version> {
    let mut parts: Vec<&str> = v.trim().split('.').take(3).collect();
    while parts.len() < 3 {
        parts.push("0");
    }
    semver::Version::parse(&parts.join(".")).ok()
}
