//! Modules compiled into the crate.

pub mod sound_recorder;

use std::sync::Arc;

use crate::descriptor::{Host, ModuleDescriptor};
use crate::error::ModuleError;

/// Registry path and constructor of a built-in module.
struct Builtin {
    path: &'static str,
    build: fn(Option<Arc<dyn Host>>, Vec<(String, String)>) -> ModuleDescriptor,
}

const BUILTINS: &[Builtin] = &[Builtin {
    path: sound_recorder::PATH,
    build: build_sound_recorder,
}];

fn build_sound_recorder(host: Option<Arc<dyn Host>>, params: Vec<(String, String)>) -> ModuleDescriptor {
    sound_recorder::new(host, params)
}

/// Registry paths of all built-in modules (e.g. `collection/sound_recorder`).
pub fn names() -> impl Iterator<Item = &'static str> {
    BUILTINS.iter().map(|b| b.path)
}

/// Instantiate a built-in module by registry path.
pub fn instantiate<I, N, V>(
    path: &str,
    host: Option<Arc<dyn Host>>,
    params: I,
) -> Result<ModuleDescriptor, ModuleError>
where
    I: IntoIterator<Item = (N, V)>,
    N: Into<String>,
    V: Into<String>,
{
    let builtin = BUILTINS
        .iter()
        .find(|b| b.path == path)
        .ok_or_else(|| ModuleError::UnknownModule(path.to_string()))?;
    let params = params.into_iter().map(|(n, v)| (n.into(), v.into())).collect();
    Ok((builtin.build)(host, params))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn registry_lists_sound_recorder() {
        let names: Vec<_> = names().collect();
        assert_eq!(names, vec!["collection/sound_recorder"]);
    }

    #[test]
    fn instantiate_by_path_applies_params() {
        let module = instantiate("collection/sound_recorder", None, [("RecordTime", "30")]).unwrap();
        assert_eq!(module.metadata().name, "Start-SoundRecorder");
        assert_eq!(module.option("RecordTime"), Some("30"));
    }

    #[test]
    fn unknown_path_is_an_error() {
        let err = instantiate("collection/webcam", None, Vec::<(String, String)>::new()).unwrap_err();
        assert!(matches!(err, ModuleError::UnknownModule(ref p) if p == "collection/webcam"));
    }
}
