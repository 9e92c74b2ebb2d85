//! `Start-SoundRecorder`: records audio from the default input device with
//! the built-in Windows SoundRecorder.

use std::sync::Arc;

use crate::descriptor::{Host, ModuleDescriptor};
use crate::metadata::ModuleMetadata;
use crate::schema::{AGENT_OPTION, OptionKind, OptionSchema, OptionSpec};
use crate::template::Template;

pub const PATH: &str = "collection/sound_recorder";

const TEMPLATE: &str = include_str!("../../assets/sound_recorder.ps1");

#[must_use]
pub fn metadata() -> ModuleMetadata {
    ModuleMetadata {
        name: "Start-SoundRecorder".to_string(),
        authors: vec!["@coffeetocode".to_string()],
        description: "This module uses the built in Windows SoundRecorder program to capture audio \
                      from the default recording device. Records at 1411 kbps (default rate)."
            .to_string(),
        background: false,
        output_extension: Some("wav".to_string()),
        needs_admin: false,
        opsec_safe: false,
        min_runtime_version: "2".to_string(),
        comments: vec![
            "comment".to_string(),
            "Based on WebcamRecorder module, but uses built-in SoundRecorder (easiest/dumbest way to do this)."
                .to_string(),
        ],
    }
}

#[must_use]
pub fn schema() -> OptionSchema {
    let declarations = [
        (AGENT_OPTION, OptionSpec::new("Agent to run the module on.", true, OptionKind::String)),
        (
            "RecordTime",
            OptionSpec::new(
                "Length of time to record in seconds. Defaults to 5.",
                false,
                OptionKind::Integer,
            ),
        ),
        (
            "OutPath",
            OptionSpec::new(
                "Temporary save path for the .wav file. Defaults to the current users APPDATA\\roaming directory",
                false,
                OptionKind::String,
            ),
        ),
    ];
    match OptionSchema::new(declarations) {
        Ok(schema) => schema,
        Err(e) => unreachable!("built-in sound recorder schema is valid: {e}"),
    }
}

#[must_use]
pub fn template() -> Template {
    Template::embedded(TEMPLATE)
}

/// Instantiate the module, seeding options from `params`.
pub fn new<I, N, V>(host: Option<Arc<dyn Host>>, params: I) -> ModuleDescriptor
where
    I: IntoIterator<Item = (N, V)>,
    N: AsRef<str>,
    V: Into<String>,
{
    ModuleDescriptor::new(host, metadata(), schema(), template(), params)
}
