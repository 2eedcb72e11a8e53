use contact_book::error::StorageResult;
use contact_book::{AddressBook, AddressBookStore};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory address book store for testing.
///
/// Keeps the last saved book as serialized bytes, so loading exercises the
/// same decode path as the file store, and counts calls for verification.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockStore {
    saved: RefCell<Option<Vec<u8>>>,
    call_counts: RefCell<HashMap<String, usize>>,
}

#[allow(dead_code)]
impl MockStore {
    /// Create a new empty MockStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `book`.
    pub fn with_book(book: &AddressBook) -> Self {
        let store = Self::new();
        *store.saved.borrow_mut() = Some(book.to_bytes().unwrap());
        store
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        *self.call_counts.borrow().get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        *self
            .call_counts
            .borrow_mut()
            .entry(method.to_string())
            .or_insert(0) += 1;
    }
}

impl AddressBookStore for MockStore {
    fn load(&self) -> StorageResult<AddressBook> {
        self.track_call("load");
        match self.saved.borrow().as_deref() {
            Some(bytes) => AddressBook::from_bytes(bytes),
            None => Ok(AddressBook::new()),
        }
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.track_call("save");
        *self.saved.borrow_mut() = Some(book.to_bytes()?);
        Ok(())
    }
}
