use clap::ValueEnum;

/// What the renamer does when one entry cannot be migrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum ErrorPolicy {
    /// Stop the whole run at the first failure
    #[default]
    Abort,
    /// Log the failure, keep it in the report and carry on
    Skip,
}
