//! Module contract for remotely tasked capabilities.
//!
//! A module declares immutable [`ModuleMetadata`], an [`OptionSchema`] and an
//! opaque [`Template`]. A [`ModuleDescriptor`] joins those declarations with
//! host-configured [`OptionValues`] and renders the final payload.

pub mod builtin;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod manifest;
pub mod metadata;
pub mod render;
pub mod schema;
pub mod template;
pub mod values;

pub use config::RenderConfig;
pub use descriptor::{Host, ModuleDescriptor};
pub use error::{ModuleError, ValidationIssue};
pub use manifest::ModuleManifest;
pub use metadata::ModuleMetadata;
pub use render::{Quoting, RenderOptions};
pub use schema::{AGENT_OPTION, OptionKind, OptionSchema, OptionSpec};
pub use template::Template;
pub use values::OptionValues;
