//! The CLI acting as module host.

use std::sync::Arc;

use tasking_module::Host;

/// Host handle given to every module the CLI instantiates.
#[derive(Debug, Default)]
pub struct CliHost;

impl Host for CliHost {
    fn name(&self) -> &str {
        "tasking-cli"
    }
}

impl CliHost {
    #[must_use]
    pub fn handle() -> Arc<dyn Host> {
        Arc::new(Self)
    }
}
