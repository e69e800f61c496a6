use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

/// Kind of a directory entry, as seen without following symbolic links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl From<fs::FileType> for EntryKind {
    fn from(file_type: fs::FileType) -> Self {
        if file_type.is_dir() {
            EntryKind::Directory
        } else {
            // Symlinks and special files are renamed like files and never descended into
            EntryKind::File
        }
    }
}

/// Base names found directly inside one directory, split by kind.
///
/// Names are sorted so that a run visits entries in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryListing {
    pub files: Vec<OsString>,
    pub directories: Vec<OsString>,
}

impl DirectoryListing {
    pub fn read(dir: &Path) -> io::Result<Self> {
        let mut listing = DirectoryListing::default();

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            match EntryKind::from(entry.file_type()?) {
                EntryKind::File => listing.files.push(entry.file_name()),
                EntryKind::Directory => listing.directories.push(entry.file_name()),
            }
        }

        listing.files.sort();
        listing.directories.sort();

        debug!(
            "Listed {}: {} files, {} directories",
            dir.display(),
            listing.files.len(),
            listing.directories.len()
        );
        Ok(listing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn splits_files_and_directories() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::create_dir(temp_dir.path().join("b dir")).unwrap();
        fs::create_dir(temp_dir.path().join("a dir")).unwrap();
        fs::write(temp_dir.path().join("note.md"), "x").unwrap();

        let listing = DirectoryListing::read(temp_dir.path()).unwrap();

        assert_eq!(listing.files, vec![OsString::from("note.md")]);
        assert_eq!(
            listing.directories,
            vec![OsString::from("a dir"), OsString::from("b dir")]
        );
    }

    #[test]
    fn empty_directory_has_empty_listing() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");

        let listing = DirectoryListing::read(temp_dir.path()).unwrap();

        assert_eq!(listing, DirectoryListing::default());
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");

        let result = DirectoryListing::read(&temp_dir.path().join("missing"));

        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directories_are_listed_as_files() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::create_dir(temp_dir.path().join("target")).unwrap();
        std::os::unix::fs::symlink(
            temp_dir.path().join("target"),
            temp_dir.path().join("link"),
        )
        .unwrap();

        let listing = DirectoryListing::read(temp_dir.path()).unwrap();

        assert_eq!(listing.files, vec![OsString::from("link")]);
        assert_eq!(listing.directories, vec![OsString::from("target")]);
    }
}
