//! Process flags and session command grammar.

use clap::{Parser, Subcommand};
use keepnote_core::config::{LOG_DIR_ENV, LOG_LEVEL_ENV};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "keepnote")]
#[command(about = "Take, archive and trash notes in a terminal session", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log level (trace|debug|info|warn|error)
    #[arg(long, env = LOG_LEVEL_ENV)]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files
    #[arg(long, env = LOG_DIR_ENV)]
    pub log_dir: Option<PathBuf>,

    /// Read session commands from a file instead of stdin
    #[arg(long)]
    pub script: Option<PathBuf>,
}

/// One line of session input, parsed with the line's first word as the
/// command name.
#[derive(Debug, Parser)]
#[command(multicall = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum SessionCommand {
    /// Navigate to a path (`/`, `/archive`, `/delete`)
    Go { path: String },
    /// Click a drawer entry (1 = Notes, 2 = Archives, 3 = Trash)
    Nav { entry: usize },
    /// Toggle the navigation drawer
    Menu,
    /// Render the current view
    #[command(alias = "ls")]
    Show {
        /// Print the view model as JSON
        #[arg(long)]
        json: bool,
    },
    /// Click the add form's text area
    Focus,
    /// Type a heading into the open editor, or the add form
    Heading {
        /// Rest of the line, kept verbatim
        #[arg(default_value = "")]
        value: String,
    },
    /// Type text into the open editor, or the add form
    Text {
        /// Rest of the line, kept verbatim
        #[arg(default_value = "")]
        value: String,
    },
    /// Click away from the add form, saving a non-empty draft
    Away,
    /// Archive card N of the notes view
    Archive { card: usize },
    /// Move card N to the trash
    Trash { card: usize },
    /// Return archived card N to the notes view
    Unarchive { card: usize },
    /// Return trashed card N to the notes view
    Restore { card: usize },
    /// Delete trashed card N forever
    Purge { card: usize },
    /// Drag card FROM onto position TO (omit TO to drop outside the grid)
    Drag { from: usize, to: Option<usize> },
    /// Open card N of the notes view in the editor
    Edit { card: usize },
    /// Dismiss the editor, saving its content
    Close,
    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// Parses one trimmed session line.
///
/// `heading` and `text` take the rest of the line as typed, so note content
/// never reaches the flag parser. Every other command goes through clap.
pub fn parse_line(line: &str) -> Result<SessionCommand, clap::Error> {
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim_start()),
        None => (line, ""),
    };
    match name {
        "heading" => Ok(SessionCommand::Heading {
            value: rest.to_string(),
        }),
        "text" => Ok(SessionCommand::Text {
            value: rest.to_string(),
        }),
        _ => SessionLine::try_parse_from(line.split_whitespace()).map(|parsed| parsed.command),
    }
}
