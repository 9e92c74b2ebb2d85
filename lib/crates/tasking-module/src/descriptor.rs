//! The module descriptor handed to hosts.

use std::fmt;
use std::sync::Arc;

use crate::error::{ModuleError, ValidationIssue};
use crate::metadata::ModuleMetadata;
use crate::render::{RenderOptions, render_arguments};
use crate::schema::{OptionKind, OptionSchema, OptionSpec};
use crate::template::Template;
use crate::values::OptionValues;

/// Opaque handle to the host environment that instantiated a module.
///
/// The descriptor keeps it so module code can reach host facilities
/// (listeners, agent handlers) later; the contract itself never calls it.
pub trait Host: Send + Sync {
    /// Short name identifying the host, used in logs.
    fn name(&self) -> &str;
}

/// A module instance: fixed metadata, option schema and template, plus the
/// option values configured by the host.
pub struct ModuleDescriptor {
    metadata: ModuleMetadata,
    schema: OptionSchema,
    values: OptionValues,
    template: Template,
    host: Option<Arc<dyn Host>>,
}

impl fmt::Debug for ModuleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleDescriptor")
            .field("metadata", &self.metadata)
            .field("schema", &self.schema)
            .field("values", &self.values)
            .field("host", &self.host.as_ref().map(|h| h.name().to_string()))
            .finish_non_exhaustive()
    }
}

impl ModuleDescriptor {
    /// Create a descriptor, seeding option values from `params`.
    ///
    /// Pairs whose name exactly matches a declared option set its value;
    /// any other pair is dropped. Required options are not checked here.
    pub fn new<I, N, V>(
        host: Option<Arc<dyn Host>>,
        metadata: ModuleMetadata,
        schema: OptionSchema,
        template: Template,
        params: I,
    ) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: AsRef<str>,
        V: Into<String>,
    {
        let mut values = OptionValues::for_schema(&schema);
        for (name, value) in params {
            let name = name.as_ref();
            if values.set(name, value).is_err() {
                tracing::debug!(module = %metadata.name, option = name, "ignoring unknown option parameter");
            }
        }
        Self {
            metadata,
            schema,
            values,
            template,
            host,
        }
    }

    #[must_use]
    pub fn metadata(&self) -> &ModuleMetadata {
        &self.metadata
    }

    #[must_use]
    pub fn schema(&self) -> &OptionSchema {
        &self.schema
    }

    #[must_use]
    pub fn template(&self) -> &Template {
        &self.template
    }

    #[must_use]
    pub fn host(&self) -> Option<&Arc<dyn Host>> {
        self.host.as_ref()
    }

    /// Options in declaration order with their current values.
    pub fn options(&self) -> impl Iterator<Item = (&str, &OptionSpec, &str)> {
        self.schema
            .iter()
            .map(|(name, spec)| (name, spec, self.values.get(name).unwrap_or_default()))
    }

    /// Current value of an option, `None` when it is not declared.
    #[must_use]
    pub fn option(&self, name: &str) -> Option<&str> {
        self.values.get(name)
    }

    /// Set an option value. Unlike construction, unknown names are an error.
    pub fn set_option(&mut self, name: &str, value: impl Into<String>) -> Result<(), ModuleError> {
        self.values.set(name, value)
    }

    /// Reset an option to the empty default.
    pub fn clear_option(&mut self, name: &str) -> Result<(), ModuleError> {
        self.values.set(name, String::new())
    }

    /// Names of required options that hold no value, in declaration order.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        self.schema
            .iter()
            .filter(|(name, spec)| spec.required && !self.values.is_set(name))
            .map(|(name, _)| name.to_string())
            .collect()
    }

    /// Missing required values plus values that do not fit their kind.
    #[must_use]
    pub fn check(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        for (name, spec, value) in self.options() {
            if value.is_empty() {
                if spec.required {
                    issues.push(ValidationIssue::MissingRequired {
                        option: name.to_string(),
                    });
                }
                continue;
            }
            match spec.kind {
                OptionKind::Integer if value.parse::<i32>().is_err() => {
                    issues.push(ValidationIssue::NotAnInteger {
                        option: name.to_string(),
                        value: value.to_string(),
                    });
                }
                OptionKind::Switch
                    if !value.eq_ignore_ascii_case("true") && !value.eq_ignore_ascii_case("false") =>
                {
                    issues.push(ValidationIssue::NotASwitch {
                        option: name.to_string(),
                        value: value.to_string(),
                    });
                }
                _ => {}
            }
        }
        issues
    }

    /// Render the payload: the template followed by ` -Name value` for every
    /// non-agent option holding a value (` -Name` alone for `true`).
    ///
    /// Never fails; missing required options are simply left out.
    #[must_use]
    pub fn generate(&self) -> String {
        self.generate_with(&RenderOptions::default())
    }

    /// Render the payload with an explicit quoting and switch policy.
    #[must_use]
    pub fn generate_with(&self, opts: &RenderOptions) -> String {
        let mut script = self.template.as_str().to_string();
        script.push_str(&render_arguments(&self.schema, &self.values, opts));
        script
    }

    /// Like [`Self::generate_with`] but refuses to render while
    /// [`Self::check`] reports issues.
    pub fn generate_checked(&self, opts: &RenderOptions) -> Result<String, ModuleError> {
        let issues = self.check();
        if !issues.is_empty() {
            return Err(ModuleError::Validation(issues));
        }
        Ok(self.generate_with(opts))
    }
}
