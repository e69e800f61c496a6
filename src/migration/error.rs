use std::io;
use std::path::{Path, PathBuf};

use snafu::Snafu;

use crate::ext::PathDisplayExt;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum MigrationError {
    #[snafu(display(
        "Directory {} does not exist or is not a directory",
        path.best_effort_display()
    ))]
    NotFound { path: PathBuf },
    #[snafu(display("Permission denied for {}", path.best_effort_display()))]
    Permission { path: PathBuf, source: io::Error },
    #[snafu(display(
        "Cannot rename {} to {}: target already exists",
        from.best_effort_display(),
        to.display()
    ))]
    Collision { from: PathBuf, to: PathBuf },
    #[snafu(display("Failed to read directory {}", path.best_effort_display()))]
    ReadDir { path: PathBuf, source: io::Error },
    #[snafu(display(
        "Failed to rename {} to {}",
        from.best_effort_display(),
        to.best_effort_display()
    ))]
    Rename {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },
}

impl MigrationError {
    /// Classifies a failure to list `path`.
    pub(crate) fn reading(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::NotADirectory => {
                MigrationError::NotFound { path }
            }
            io::ErrorKind::PermissionDenied => MigrationError::Permission { path, source },
            _ => MigrationError::ReadDir { path, source },
        }
    }

    /// Classifies a failure of the rename primitive itself.
    pub(crate) fn renaming(from: &Path, to: &Path, source: io::Error) -> Self {
        let (from, to) = (from.to_path_buf(), to.to_path_buf());
        match source.kind() {
            io::ErrorKind::AlreadyExists | io::ErrorKind::DirectoryNotEmpty => {
                MigrationError::Collision { from, to }
            }
            io::ErrorKind::PermissionDenied => MigrationError::Permission { path: from, source },
            _ => MigrationError::Rename { from, to, source },
        }
    }
}
