//! JSON output helpers.
//!
//! Provides the error-object formatter used by all `--json` code paths when
//! a command fails.

use anyhow::{Context, Result};
use tasking_module::ModuleError;

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "...",
///   "issues": [...]
/// }
/// ```
///
/// `issues` is only present for validation failures.
pub fn format_error(message: &str, code: &str, err: Option<&anyhow::Error>) -> Result<String> {
    let mut obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    if let Some(ModuleError::Validation(issues)) = err.and_then(|e| e.downcast_ref::<ModuleError>()) {
        obj["issues"] = serde_json::to_value(issues).context("JSON serialization failed")?;
    }
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Stable machine-readable code for a command failure.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<ModuleError>() {
        Some(ModuleError::Validation(_)) => "VALIDATION_FAILED",
        Some(ModuleError::UnknownModule(_)) => "UNKNOWN_MODULE",
        Some(ModuleError::UnknownOption(_)) => "UNKNOWN_OPTION",
        Some(ModuleError::Manifest(_) | ModuleError::Io { .. }) => "MANIFEST_ERROR",
        Some(
            ModuleError::InvalidOptionName(_)
            | ModuleError::DuplicateOption { .. }
            | ModuleError::AgentNotRequired,
        ) => "INVALID_SCHEMA",
        None => "ERROR",
    }
}
