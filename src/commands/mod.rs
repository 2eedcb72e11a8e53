//! Command layer: parsing free-text input, running it against the address
//! book, and the interactive session loop.

pub mod handlers;
pub mod parser;
pub mod session;

pub use handlers::{
    add_birthday, add_contact, change_phone, delete_contact, execute, render, show_all,
    show_birthday, show_phone, upcoming_birthdays, Outcome,
};
pub use parser::Command;
