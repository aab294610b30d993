//! Line-oriented terminal front end for the users page.
//!
//! Reads one command per line and writes the table, detail views and
//! confirmation dialogs back to the output. Works over any async reader and
//! writer so sessions can be scripted in tests.

mod confirm;
mod table;

use std::io;

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::domain::{UserId, UsersPage};

pub use confirm::LineConfirmation;
pub use table::{render_details, render_table};

const HELP: &str = "\
Commands:
  list          show the users table
  show <id>     show details for one user
  delete <id>   delete a user (asks for confirmation)
  reload        fetch users again
  help          show this help
  quit          exit
";

/// One parsed console command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Show the table.
    List,
    /// Show one user's details.
    Show(UserId),
    /// Delete one user after confirmation.
    Delete(UserId),
    /// Fetch again.
    Reload,
    /// Print the command list.
    Help,
    /// Leave the console.
    Quit,
    /// Blank line.
    Empty,
}

/// Reasons a command line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The first word is not a known command.
    #[error("unknown command `{0}`; type `help` for a list")]
    Unknown(String),
    /// The command needs a user id.
    #[error("`{0}` needs a user id")]
    MissingId(&'static str),
    /// The id argument is not a non-negative integer.
    #[error("`{0}` is not a valid user id")]
    InvalidId(String),
}

impl Command {
    /// Parse one input line.
    ///
    /// # Examples
    /// ```
    /// use user_roster::domain::UserId;
    /// use user_roster::inbound::console::Command;
    ///
    /// assert_eq!(Command::parse(" delete 3 "), Ok(Command::Delete(UserId::new(3))));
    /// assert!(Command::parse("show").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] for unknown commands or bad ids.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(Self::Empty);
        };
        match name.to_ascii_lowercase().as_str() {
            "list" | "ls" => Ok(Self::List),
            "show" => parse_id("show", words.next()).map(Self::Show),
            "delete" | "rm" => parse_id("delete", words.next()).map(Self::Delete),
            "reload" => Ok(Self::Reload),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(name.to_owned())),
        }
    }
}

fn parse_id(command: &'static str, raw: Option<&str>) -> Result<UserId, CommandError> {
    let value = raw.ok_or(CommandError::MissingId(command))?;
    value
        .parse::<u64>()
        .map(UserId::new)
        .map_err(|_| CommandError::InvalidId(value.to_owned()))
}

/// Open `page`, print the table, then serve commands until `quit` or end of
/// input.
///
/// # Errors
///
/// Returns the first I/O error raised while reading commands or writing
/// output.
pub async fn run_console<R, W>(page: &mut UsersPage, input: R, mut output: W) -> io::Result<()>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    let mut lines = input.lines();

    output.write_all(b"Loading users...\n").await?;
    page.open().await;
    output.write_all(render_table(page.users()).as_bytes()).await?;

    loop {
        output.write_all(b"> ").await?;
        output.flush().await?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = Command::parse(&line);
        if matches!(command, Ok(Command::List | Command::Show(_) | Command::Delete(_))) {
            page.sync();
        }
        let reply = match command {
            Ok(Command::Quit) => break,
            Ok(Command::Empty) => continue,
            Ok(Command::List) => render_table(page.users()),
            Ok(Command::Show(id)) => page.details(id).map_or_else(
                || format!("No visible user with id {id}.\n"),
                |details| render_details(&details),
            ),
            Ok(Command::Delete(id)) => {
                if page.details(id).is_none() {
                    format!("No visible user with id {id}.\n")
                } else {
                    let mut confirmation = LineConfirmation::new(&mut lines, &mut output);
                    if page.request_delete(id, &mut confirmation).await {
                        format!("User {id} deleted.\n{}", render_table(page.users()))
                    } else {
                        "Deletion cancelled.\n".to_owned()
                    }
                }
            }
            Ok(Command::Reload) => {
                page.open().await;
                render_table(page.users())
            }
            Ok(Command::Help) => HELP.to_owned(),
            Err(error) => format!("{error}\n"),
        };
        output.write_all(reply.as_bytes()).await?;
    }

    output.flush().await
}
