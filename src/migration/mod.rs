//! Renaming of legacy `N - Name` entries to the `NN. Name` layout.

mod error;
mod error_policy;
mod prefix;
mod renamer;
mod report;

pub use error::MigrationError;
pub use error_policy::ErrorPolicy;
pub use prefix::migrate_name;
pub use renamer::Renamer;
pub use report::{MigrationReport, RenamedEntry};
