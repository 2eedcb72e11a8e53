//! The interactive read-eval-print loop.

use super::handlers::{execute, render, Outcome};
use super::parser::Command;
use crate::error::CommandResult;
use crate::models::AddressBook;
use chrono::NaiveDate;
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";

/// Drive a session over `input`/`output` until `exit`, `close`, or end of
/// input. End of input says goodbye like `exit` does.
///
/// Lines that are not valid UTF-8 are decoded lossily and go through the
/// parser like any other input.
///
/// `today` is asked for the date each time upcoming birthdays are queried.
/// The book is left in memory; saving it is the caller's job.
pub fn run<R, W, F>(
    mut input: R,
    output: &mut W,
    book: &mut AddressBook,
    window_days: u32,
    today: F,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    F: Fn() -> NaiveDate,
{
    writeln!(output, "{}", WELCOME)?;

    let mut buf = Vec::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            debug!("End of input, closing session");
            writeln!(output)?;
            writeln!(output, "{}", Outcome::Goodbye)?;
            break;
        }
        let line = String::from_utf8_lossy(&buf);

        let result: CommandResult<_> = match Command::parse(&line) {
            Ok(None) => continue,
            Ok(Some(command)) => {
                debug!(?command, "Executing command");
                execute(&command, book, today(), window_days)
            }
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            warn!(error = %e, input = %line.trim(), "Command failed");
        }

        writeln!(output, "{}", render(&result))?;

        if result.as_ref().is_ok_and(|o| o.is_exit()) {
            break;
        }
    }

    Ok(())
}
