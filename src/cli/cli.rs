use std::path::PathBuf;

use clap::Parser;

use crate::application::data::LogLevel;
use crate::migration::ErrorPolicy;

/// Renames `N - Name` notes and folders to `NN. Name`, deepest first.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// Notes directory to migrate; prompted for when omitted
    pub root: Option<PathBuf>,
    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
    /// Whether one failing entry stops the run or is skipped and reported
    #[clap(long, short = 'e', default_value = "abort", value_enum)]
    pub on_error: ErrorPolicy,
}
