//! Module manifests (`module.yaml`).
//!
//! A manifest declares a module without code: metadata, options in rendering
//! order and the path of its template, relative to the manifest.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::descriptor::{Host, ModuleDescriptor};
use crate::error::ModuleError;
use crate::metadata::ModuleMetadata;
use crate::schema::{OptionKind, OptionSchema, OptionSpec};
use crate::template::Template;

/// Declaration of a module loaded from YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleManifest {
    pub metadata: ModuleMetadata,
    #[serde(default)]
    pub options: Vec<OptionDecl>,
    /// Template file, relative to the manifest directory.
    pub template: PathBuf,
    #[serde(skip)]
    base_dir: PathBuf,
}

/// One entry of the manifest `options` list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionDecl {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub kind: OptionKind,
}

impl ModuleManifest {
    /// Parse a manifest; relative template paths resolve against the
    /// current directory.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ModuleError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self, ModuleError> {
        let text = std::fs::read_to_string(path).map_err(|source| ModuleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut manifest = Self::from_yaml_str(&text)?;
        manifest.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(manifest)
    }

    /// Build the option schema declared by this manifest.
    pub fn schema(&self) -> Result<OptionSchema, ModuleError> {
        OptionSchema::new(self.options.iter().map(|o| {
            (
                o.name.clone(),
                OptionSpec::new(o.description.clone(), o.required, o.kind),
            )
        }))
    }

    /// Resolved location of the template file.
    #[must_use]
    pub fn template_path(&self) -> PathBuf {
        self.base_dir.join(&self.template)
    }

    /// Create a descriptor, loading the template from disk.
    pub fn instantiate<I, N, V>(
        &self,
        host: Option<Arc<dyn Host>>,
        params: I,
    ) -> Result<ModuleDescriptor, ModuleError>
    where
        I: IntoIterator<Item = (N, V)>,
        N: AsRef<str>,
        V: Into<String>,
    {
        let schema = self.schema()?;
        let template = Template::from_file(&self.template_path())?;
        Ok(ModuleDescriptor::new(
            host,
            self.metadata.clone(),
            schema,
            template,
            params,
        ))
    }
}
