//! Typed errors for the module contract.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

// ── Validation issues ─────────────────────────────────────────────────────────

/// A single problem found by [`crate::ModuleDescriptor::check`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum ValidationIssue {
    /// A required option carries no value.
    MissingRequired { option: String },
    /// An `Integer` option whose value is not a 32-bit integer.
    NotAnInteger { option: String, value: String },
    /// A `Switch` option whose value is neither `true` nor `false`.
    NotASwitch { option: String, value: String },
}

impl ValidationIssue {
    /// Name of the option the issue refers to.
    #[must_use]
    pub fn option(&self) -> &str {
        match self {
            Self::MissingRequired { option }
            | Self::NotAnInteger { option, .. }
            | Self::NotASwitch { option, .. } => option,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequired { option } => write!(f, "{option} is required"),
            Self::NotAnInteger { option, value } => {
                write!(f, "{option} expects an integer, got '{value}'")
            }
            Self::NotASwitch { option, value } => {
                write!(f, "{option} expects true or false, got '{value}'")
            }
        }
    }
}

// ── Module errors ─────────────────────────────────────────────────────────────

/// Errors raised by schema construction, option writes, strict generation
/// and manifest loading.
#[derive(Debug, Error)]
pub enum ModuleError {
    #[error("Unknown option '{0}'.")]
    UnknownOption(String),

    #[error("Unknown module '{0}'.")]
    UnknownModule(String),

    #[error("Invalid option name '{0}': must be non-empty, contain no whitespace and not start with '-'")]
    InvalidOptionName(String),

    #[error("Option '{name}' conflicts with '{existing}' (option names are unique ignoring case)")]
    DuplicateOption { name: String, existing: String },

    #[error("The Agent option must be required.")]
    AgentNotRequired,

    #[error("Module options failed validation: {}", join_issues(.0))]
    Validation(Vec<ValidationIssue>),

    #[error("Invalid module manifest: {0}")]
    Manifest(#[from] serde_yaml::Error),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_lists_every_issue() {
        let err = ModuleError::Validation(vec![
            ValidationIssue::MissingRequired {
                option: "Agent".to_string(),
            },
            ValidationIssue::NotAnInteger {
                option: "RecordTime".to_string(),
                value: "soon".to_string(),
            },
        ]);
        assert_eq!(
            err.to_string(),
            "Module options failed validation: Agent is required; RecordTime expects an integer, got 'soon'"
        );
    }

    #[test]
    fn validation_issue_serializes_tagged() {
        let issue = ValidationIssue::NotASwitch {
            option: "Verbose".to_string(),
            value: "maybe".to_string(),
        };
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["issue"], "not_a_switch");
        assert_eq!(json["option"], "Verbose");
        assert_eq!(issue.option(), "Verbose");
    }
}
