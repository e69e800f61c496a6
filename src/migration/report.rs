use std::path::PathBuf;

use derive_more::Display;

use super::MigrationError;

/// One rename that was carried out.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{} -> {}", from.display(), to.display())]
pub struct RenamedEntry {
    pub from: PathBuf,
    pub to: PathBuf,
}

#[derive(Debug, Default)]
pub struct MigrationReport {
    renamed: Vec<RenamedEntry>,
    skipped: Vec<MigrationError>,
}

impl MigrationReport {
    pub(crate) fn record_rename(&mut self, entry: RenamedEntry) {
        self.renamed.push(entry);
    }

    pub(crate) fn record_skip(&mut self, error: MigrationError) {
        self.skipped.push(error);
    }

    /// Renames in the order they happened, deepest entries first.
    pub fn renamed(&self) -> &[RenamedEntry] {
        &self.renamed
    }

    /// Failures that were passed over because of the skip policy.
    pub fn skipped(&self) -> &[MigrationError] {
        &self.skipped
    }

    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renamed_entry_displays_both_paths() {
        let entry = RenamedEntry {
            from: PathBuf::from("root/3 - Intro"),
            to: PathBuf::from("root/03. Intro"),
        };

        assert_eq!(entry.to_string(), "root/3 - Intro -> root/03. Intro");
    }

    #[test]
    fn report_is_complete_until_something_is_skipped() {
        let mut report = MigrationReport::default();
        report.record_rename(RenamedEntry {
            from: PathBuf::from("a/1 - x"),
            to: PathBuf::from("a/01. x"),
        });
        assert!(report.is_complete());

        report.record_skip(MigrationError::Collision {
            from: PathBuf::from("a/5 - A"),
            to: PathBuf::from("a/05. A"),
        });
        assert!(!report.is_complete());
        assert_eq!(report.renamed().len(), 1);
        assert_eq!(report.skipped().len(), 1);
    }
}
