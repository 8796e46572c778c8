//! Terminal command registry and parsing.

use pylette_core::ShellEvent;
use thiserror::Error;

/// A command typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Forwarded to the board.
    Event(ShellEvent),
    List,
    Json,
    Help,
    Quit,
}

/// Errors from reading a command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command: {0} (try `help`)")]
    Unknown(String),
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),
    #[error("Invalid palette number: {0}")]
    InvalidPalette(String),
}

impl Command {
    /// Parse one input line. Returns `Ok(None)` for blank lines.
    ///
    /// Palette numbers are 1-based at the prompt and 0-based in events. The
    /// text given to `set` is passed on as typed, trailing spaces included.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        if trimmed.trim_end().is_empty() {
            return Ok(None);
        }

        let (name, rest) = match trimmed.split_once(' ') {
            Some((name, rest)) => (name, rest),
            None => (trimmed.trim_end(), ""),
        };

        let command = match name {
            "add" => Self::Event(ShellEvent::AddPalette),
            "paste" => Self::Event(ShellEvent::Clicked {
                palette: parse_palette(rest.trim())?,
            }),
            "set" => {
                let rest = rest.trim_start();
                let (number, text) = rest.split_once(' ').unwrap_or((rest, ""));
                Self::Event(ShellEvent::TextChanged {
                    palette: parse_palette(number)?,
                    text: text.to_string(),
                })
            }
            "list" => Self::List,
            "json" => Self::Json,
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn parse_palette(number: &str) -> Result<usize, CommandError> {
    if number.is_empty() {
        return Err(CommandError::MissingArgument("palette number"));
    }
    match number.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => Err(CommandError::InvalidPalette(number.to_string())),
    }
}

/// A documented prompt command.
#[derive(Debug, Clone)]
pub struct CommandInfo {
    pub usage: &'static str,
    pub description: &'static str,
}

impl CommandInfo {
    pub const fn new(usage: &'static str, description: &'static str) -> Self {
        Self { usage, description }
    }
}

/// Registry of all prompt commands.
pub struct CommandRegistry;

impl CommandRegistry {
    /// Get all registered commands.
    pub fn all() -> Vec<CommandInfo> {
        vec![
            CommandInfo::new("add", "Add a palette"),
            CommandInfo::new("paste N", "Paste a color from the clipboard into palette N"),
            CommandInfo::new("set N TEXT", "Type TEXT into the entry of palette N"),
            CommandInfo::new("list", "Show all palettes and their swatches"),
            CommandInfo::new("json", "Print the palettes as JSON"),
            CommandInfo::new("help", "Show this help"),
            CommandInfo::new("quit", "Exit"),
        ]
    }

    /// Help text, one command per line.
    pub fn help() -> String {
        let mut text = String::from("=== Commands ===\n");
        for info in Self::all() {
            text.push_str(&format!("  {:12} {}\n", info.usage, info.description));
        }
        text
    }
}
