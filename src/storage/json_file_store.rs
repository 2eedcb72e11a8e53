use crate::error::{StorageError, StorageResult};
use crate::models::AddressBook;
use crate::storage::traits::AddressBookStore;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

/// Address book store backed by a single JSON file.
///
/// Saves go through a sibling temp file and a rename, so an interrupted save
/// leaves the previous file intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the file at `path`. Nothing is touched until
    /// `load` or `save` is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl AddressBookStore for JsonFileStore {
    fn load(&self) -> StorageResult<AddressBook> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No saved address book, starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let book = AddressBook::from_bytes(&bytes)?;
        info!(path = %self.path.display(), contacts = book.len(), "Loaded address book");
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let bytes = book.to_bytes()?;
        let temp = self.temp_path();

        fs::write(&temp, bytes).map_err(|e| self.io_error(e))?;
        fs::rename(&temp, &self.path).map_err(|e| self.io_error(e))?;

        info!(path = %self.path.display(), contacts = book.len(), "Saved address book");
        Ok(())
    }
}
