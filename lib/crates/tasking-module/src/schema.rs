//! Option declarations.
//!
//! The schema is what a module declares; the values a host configures live
//! in [`crate::OptionValues`] and are joined to the schema by name.

use serde::{Deserialize, Serialize};

use crate::error::ModuleError;

/// Name of the option every module carries. It selects the agent the payload
/// is sent to and is never rendered as an argument.
pub const AGENT_OPTION: &str = "Agent";

const AGENT_DESCRIPTION: &str = "Agent to run the module on.";

/// Type hint for an option value. Values are always stored as strings; the
/// kind drives validation and per-kind rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    #[default]
    String,
    Integer,
    Switch,
}

/// Declaration of a single option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSpec {
    pub description: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub kind: OptionKind,
}

impl OptionSpec {
    #[must_use]
    pub fn new(description: impl Into<String>, required: bool, kind: OptionKind) -> Self {
        Self {
            description: description.into(),
            required,
            kind,
        }
    }
}

/// Ordered, immutable option declarations of a module.
///
/// Invariants, checked by [`OptionSchema::new`]:
/// - exactly one `Agent` option exists and it is required;
/// - names are non-empty, free of whitespace and do not start with `-`;
/// - no two names are equal ignoring ASCII case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSchema {
    entries: Vec<(String, OptionSpec)>,
}

impl OptionSchema {
    /// Build a schema from declarations in rendering order.
    ///
    /// When no `Agent` option is declared one is inserted at the front.
    pub fn new<I, N>(declarations: I) -> Result<Self, ModuleError>
    where
        I: IntoIterator<Item = (N, OptionSpec)>,
        N: Into<String>,
    {
        let mut entries: Vec<(String, OptionSpec)> = Vec::new();
        for (name, spec) in declarations {
            let name = name.into();
            if !is_valid_name(&name) {
                return Err(ModuleError::InvalidOptionName(name));
            }
            if let Some((existing, _)) = entries.iter().find(|(n, _)| n.eq_ignore_ascii_case(&name)) {
                return Err(ModuleError::DuplicateOption {
                    name,
                    existing: existing.clone(),
                });
            }
            if name == AGENT_OPTION && !spec.required {
                return Err(ModuleError::AgentNotRequired);
            }
            entries.push((name, spec));
        }

        if !entries.iter().any(|(n, _)| n == AGENT_OPTION) {
            entries.insert(
                0,
                (
                    AGENT_OPTION.to_string(),
                    OptionSpec::new(AGENT_DESCRIPTION, true, OptionKind::String),
                ),
            );
        }

        Ok(Self { entries })
    }

    /// Look up an option by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&OptionSpec> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, s)| s)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Options in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionSpec)> {
        self.entries.iter().map(|(n, s)| (n.as_str(), s))
    }

    /// Option names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Returns `true` for the option that selects the target agent.
#[must_use]
pub fn is_agent_option(name: &str) -> bool {
    name.eq_ignore_ascii_case(AGENT_OPTION)
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.starts_with('-') && !name.chars().any(char::is_whitespace)
}
