use std::io;

use snafu::Snafu;
use snafu::prelude::*;
use tracing::debug;

use crate::application::RuntimeConfig;
use crate::application::completion::write_completion;
use crate::application::prompt::{PromptError, prompt_for_root};
use crate::migration::{MigrationError, Renamer};

pub struct Application;

impl Application {
    pub fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        debug!("Runtime config: {:?}", app_config);

        let root = match app_config.root {
            Some(root) => root,
            None => prompt_for_root(&mut io::stdin().lock(), &mut io::stdout())
                .context(PromptSnafu)?,
        };

        let report = Renamer::new(root, app_config.error_policy)
            .run()
            .context(MigrationSnafu)?;

        write_completion(&report, &mut io::stdout().lock()).context(OutputSnafu)?;

        ensure!(
            report.is_complete(),
            IncompleteMigrationSnafu {
                skipped: report.skipped().len()
            }
        );
        Ok(())
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Could not determine which directory to migrate"))]
    PromptError { source: PromptError },
    #[snafu(display("Migration stopped"))]
    MigrationError { source: MigrationError },
    #[snafu(display("Failed to print the migration summary"))]
    OutputError { source: io::Error },
    #[snafu(display("Migration finished with {} skipped entries", skipped))]
    IncompleteMigration { skipped: usize },
}
