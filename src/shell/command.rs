//! Shell command parsing

use std::path::PathBuf;
use thiserror::Error;

/// A single shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `add <title>, <artist>[, <audio path>]`
    Add {
        title: String,
        artist: String,
        audio: Option<PathBuf>,
    },

    /// `remove <title>`
    Remove(String),

    Next,
    Prev,
    Play,
    Current,

    /// `list [--json]`
    List { json: bool },

    Length,

    /// `import <path>`
    Import(PathBuf),

    /// `export <path>`
    Export(PathBuf),

    Reset,
    Help,
    Quit,
}

/// Errors from parsing a command line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for a list of commands.")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),
}

/// Usage lines, one per command
pub const USAGE: &[&str] = &[
    "add <title>, <artist>[, <audio path>]",
    "remove <title>",
    "next",
    "prev",
    "play",
    "current",
    "list [--json]",
    "length",
    "import <path>",
    "export <path>",
    "reset",
    "help",
    "quit",
];

impl Command {
    /// Parse a command line
    ///
    /// Returns `Ok(None)` for blank lines. Command names are case-insensitive;
    /// everything after the name is the (trimmed) argument text.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "add" => {
                let mut fields = rest.splitn(3, ',').map(str::trim);
                let title = fields.next().unwrap_or_default().to_string();
                let artist = fields.next().unwrap_or_default().to_string();
                let audio = fields.next().filter(|p| !p.is_empty()).map(expand_path);

                // Empty title or artist is reported by the session
                Command::Add {
                    title,
                    artist,
                    audio,
                }
            }
            "remove" | "rm" | "delete" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("remove <title>"));
                }
                Command::Remove(rest.to_string())
            }
            "next" | "n" => Command::Next,
            "prev" | "previous" | "p" => Command::Prev,
            "play" => Command::Play,
            "current" | "now" => Command::Current,
            "list" | "ls" => match rest {
                "" => Command::List { json: false },
                "--json" => Command::List { json: true },
                _ => return Err(CommandError::Usage("list [--json]")),
            },
            "length" | "len" => Command::Length,
            "import" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("import <path>"));
                }
                Command::Import(expand_path(rest))
            }
            "export" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("export <path>"));
                }
                Command::Export(expand_path(rest))
            }
            "reset" => Command::Reset,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => return Err(CommandError::Unknown(name.to_string())),
        };

        Ok(Some(command))
    }
}

/// Expand `~` in a user supplied path
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}
