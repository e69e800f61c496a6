//! Read-only view of the directory tree being migrated.
//!
//! One directory level is read at a time; the tree itself is never
//! materialised, since entries get renamed while it is walked.

mod listing;

pub use listing::DirectoryListing;
