//! Runtime option values configured by a host.

use std::collections::HashMap;

use crate::error::ModuleError;
use crate::schema::OptionSchema;

/// Current value of every declared option, stored as strings.
///
/// Every option in the schema has an entry (empty by default) and no other
/// names can be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionValues {
    values: HashMap<String, String>,
}

impl OptionValues {
    /// Empty values for every option of `schema`.
    #[must_use]
    pub fn for_schema(schema: &OptionSchema) -> Self {
        Self {
            values: schema.names().map(|n| (n.to_string(), String::new())).collect(),
        }
    }

    /// Current value of `name`, or `None` when the option is not declared.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Set a declared option. Names are matched exactly.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<(), ModuleError> {
        match self.values.get_mut(name) {
            Some(slot) => {
                *slot = value.into();
                Ok(())
            }
            None => Err(ModuleError::UnknownOption(name.to_string())),
        }
    }

    /// Returns `true` when `name` is declared and holds a non-empty value.
    #[must_use]
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some_and(|v| !v.is_empty())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::schema::{OptionKind, OptionSpec};

    fn schema() -> OptionSchema {
        OptionSchema::new([("OutPath", OptionSpec::new("path", false, OptionKind::String))]).unwrap()
    }

    #[test]
    fn every_declared_option_starts_empty() {
        let values = OptionValues::for_schema(&schema());
        assert_eq!(values.get("Agent"), Some(""));
        assert_eq!(values.get("OutPath"), Some(""));
        assert!(!values.is_set("OutPath"));
    }

    #[test]
    fn set_rejects_undeclared_names() {
        let mut values = OptionValues::for_schema(&schema());
        let err = values.set("outpath", "x").unwrap_err();
        assert!(matches!(err, ModuleError::UnknownOption(ref n) if n == "outpath"));
        assert_eq!(values.get("outpath"), None);
    }

    #[test]
    fn set_overwrites_value() {
        let mut values = OptionValues::for_schema(&schema());
        values.set("OutPath", "C:\\a.wav").unwrap();
        values.set("OutPath", "C:\\b.wav").unwrap();
        assert_eq!(values.get("OutPath"), Some("C:\\b.wav"));
        assert!(values.is_set("OutPath"));
    }
}
