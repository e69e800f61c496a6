use std::path::PathBuf;

use crate::cli::Cli;
use crate::migration::ErrorPolicy;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Directory to migrate; asked for interactively when absent
    pub root: Option<PathBuf>,
    pub error_policy: ErrorPolicy,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            root: cli.root,
            error_policy: cli.on_error,
        }
    }
}
