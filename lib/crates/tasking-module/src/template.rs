//! Opaque script template a payload wraps.

use std::borrow::Cow;
use std::path::Path;

use crate::error::ModuleError;

/// Script body that the rendered arguments are appended to. Never parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template(Cow<'static, str>);

impl Template {
    /// Template compiled into the binary (usually via `include_str!`).
    #[must_use]
    pub const fn embedded(text: &'static str) -> Self {
        Self(Cow::Borrowed(text))
    }

    /// Template supplied at runtime.
    #[must_use]
    pub fn owned(text: impl Into<String>) -> Self {
        Self(Cow::Owned(text.into()))
    }

    /// Read a template file verbatim.
    pub fn from_file(path: &Path) -> Result<Self, ModuleError> {
        let text = std::fs::read_to_string(path).map_err(|source| ModuleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::owned(text))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Template {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
