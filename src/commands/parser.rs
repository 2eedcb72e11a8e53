//! Free-text command parsing.

use crate::error::{CommandError, CommandResult};

/// A parsed REPL command with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, old: String, new: String },
    Phone { name: String },
    All,
    AddBirthday { name: String, birthday: String },
    ShowBirthday { name: String },
    Birthdays,
    Delete { name: String },
    Exit,
}

impl Command {
    /// Parse one input line.
    ///
    /// The first whitespace-separated word selects the command
    /// (case-insensitive); the rest are its arguments. Extra arguments are
    /// ignored. A blank line yields `Ok(None)`.
    pub fn parse(line: &str) -> CommandResult<Option<Command>> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match word.to_lowercase().as_str() {
            "hello" => Command::Hello,
            "add" => {
                let [name, phone] = take::<2>(&args, "add", "add <name> <phone>")?;
                Command::Add { name, phone }
            }
            "change" => {
                let [name, old, new] =
                    take::<3>(&args, "change", "change <name> <old phone> <new phone>")?;
                Command::Change { name, old, new }
            }
            "phone" => {
                let [name] = take::<1>(&args, "phone", "phone <name>")?;
                Command::Phone { name }
            }
            "all" => Command::All,
            "add-birthday" => {
                let [name, birthday] =
                    take::<2>(&args, "add-birthday", "add-birthday <name> <DD.MM.YYYY>")?;
                Command::AddBirthday { name, birthday }
            }
            "show-birthday" => {
                let [name] = take::<1>(&args, "show-birthday", "show-birthday <name>")?;
                Command::ShowBirthday { name }
            }
            "birthdays" => Command::Birthdays,
            "delete" => {
                let [name] = take::<1>(&args, "delete", "delete <name>")?;
                Command::Delete { name }
            }
            "close" | "exit" => Command::Exit,
            _ => return Err(CommandError::UnknownCommand(word.to_string())),
        };

        Ok(Some(command))
    }
}

/// The first `N` arguments, owned.
fn take<const N: usize>(
    args: &[&str],
    command: &'static str,
    usage: &'static str,
) -> CommandResult<[String; N]> {
    if args.len() < N {
        return Err(CommandError::MissingArguments { command, usage });
    }
    Ok(std::array::from_fn(|i| args[i].to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("   \t").unwrap(), None);
    }

    #[test]
    fn test_parse_add() {
        assert_eq!(
            Command::parse("add Alice 1234567890").unwrap(),
            Some(Command::Add {
                name: "Alice".to_string(),
                phone: "1234567890".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_is_case_insensitive_and_trims() {
        assert_eq!(Command::parse("  HELLO  ").unwrap(), Some(Command::Hello));
        assert_eq!(Command::parse("Exit").unwrap(), Some(Command::Exit));
        assert_eq!(Command::parse("close").unwrap(), Some(Command::Exit));
    }

    #[test]
    fn test_parse_change() {
        assert_eq!(
            Command::parse("change Bob 1111111111 2222222222").unwrap(),
            Some(Command::Change {
                name: "Bob".to_string(),
                old: "1111111111".to_string(),
                new: "2222222222".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_ignores_extra_arguments() {
        assert_eq!(
            Command::parse("phone Bob extra words").unwrap(),
            Some(Command::Phone {
                name: "Bob".to_string()
            })
        );
    }

    #[test]
    fn test_parse_missing_arguments() {
        let err = Command::parse("add Alice").unwrap_err();
        assert_eq!(
            err,
            CommandError::MissingArguments {
                command: "add",
                usage: "add <name> <phone>",
            }
        );
        assert!(Command::parse("add-birthday").is_err());
        assert!(Command::parse("delete").is_err());
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            Command::parse("fly away").unwrap_err(),
            CommandError::UnknownCommand("fly".to_string())
        );
    }
}
