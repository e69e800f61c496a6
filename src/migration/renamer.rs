use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use snafu::ensure;
use tracing::{debug, info, warn};

use crate::ext::PathDisplayExt;
use crate::filesystem::DirectoryListing;

use super::error::{CollisionSnafu, NotFoundSnafu};
use super::{ErrorPolicy, MigrationError, MigrationReport, RenamedEntry, migrate_name};

/// Walks a tree bottom-up and rewrites legacy `N - ` prefixes to `NN. `.
///
/// Every directory is fully migrated before its own name is touched, so a
/// path built from a not-yet-renamed parent is never stale.
#[derive(Debug, Clone)]
pub struct Renamer {
    root: PathBuf,
    policy: ErrorPolicy,
}

impl Renamer {
    pub fn new(root: impl Into<PathBuf>, policy: ErrorPolicy) -> Self {
        Self {
            root: root.into(),
            policy,
        }
    }

    /// Migrates everything below the root. The root itself keeps its name.
    pub fn run(&self) -> Result<MigrationReport, MigrationError> {
        let metadata = fs::metadata(&self.root)
            .map_err(|source| MigrationError::reading(&self.root, source))?;
        ensure!(
            metadata.is_dir(),
            NotFoundSnafu {
                path: self.root.clone()
            }
        );
        info!("Migrating {}", self.root.best_effort_display());

        // Failing to list the root leaves nothing to do, whatever the policy
        let listing = DirectoryListing::read(&self.root)
            .map_err(|source| MigrationError::reading(&self.root, source))?;

        let mut report = MigrationReport::default();
        self.migrate_level(&self.root, &listing, &mut report)?;

        info!(
            "Renamed {} entries, skipped {}",
            report.renamed().len(),
            report.skipped().len()
        );
        Ok(report)
    }

    fn migrate_directory(
        &self,
        dir: &Path,
        report: &mut MigrationReport,
    ) -> Result<(), MigrationError> {
        match DirectoryListing::read(dir) {
            Ok(listing) => self.migrate_level(dir, &listing, report),
            Err(source) => self.handle_failure(MigrationError::reading(dir, source), report),
        }
    }

    fn migrate_level(
        &self,
        dir: &Path,
        listing: &DirectoryListing,
        report: &mut MigrationReport,
    ) -> Result<(), MigrationError> {
        for subdirectory in &listing.directories {
            self.migrate_directory(&dir.join(subdirectory), report)?;
        }

        for name in listing.files.iter().chain(&listing.directories) {
            self.migrate_entry(dir, name, report)?;
        }

        Ok(())
    }

    fn migrate_entry(
        &self,
        dir: &Path,
        name: &OsStr,
        report: &mut MigrationReport,
    ) -> Result<(), MigrationError> {
        let from = dir.join(name);
        let Some(base_name) = from.base_name() else {
            debug!("Skipping non UTF-8 name {:?}", name);
            return Ok(());
        };
        let Some(new_name) = migrate_name(base_name) else {
            return Ok(());
        };
        let to = dir.join(new_name);

        match rename_entry(&from, &to) {
            Ok(()) => {
                let entry = RenamedEntry { from, to };
                info!("Renamed {}", entry);
                report.record_rename(entry);
                Ok(())
            }
            Err(error) => self.handle_failure(error, report),
        }
    }

    fn handle_failure(
        &self,
        error: MigrationError,
        report: &mut MigrationReport,
    ) -> Result<(), MigrationError> {
        match self.policy {
            ErrorPolicy::Abort => Err(error),
            ErrorPolicy::Skip => {
                warn!("Skipping: {}", error);
                report.record_skip(error);
                Ok(())
            }
        }
    }
}

/// Renames `from` to `to`, refusing to replace anything already at `to`.
fn rename_entry(from: &Path, to: &Path) -> Result<(), MigrationError> {
    ensure!(
        to.symlink_metadata().is_err(),
        CollisionSnafu {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
        }
    );

    fs::rename(from, to).map_err(|source| MigrationError::renaming(from, to, source))
}
