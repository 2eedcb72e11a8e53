use crate::error::StorageResult;
use crate::models::AddressBook;

/// Persistence for the address book.
///
/// The book is loaded once at startup and saved once at shutdown; an
/// implementation only has to move whole books in and out.
pub trait AddressBookStore {
    /// Load the stored book, or an empty one if nothing has been saved yet.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the stored book with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
