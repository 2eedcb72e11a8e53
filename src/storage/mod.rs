//! Persistence of the address book between runs.

mod json_file_store;
mod traits;

pub use json_file_store::JsonFileStore;
pub use traits::AddressBookStore;
