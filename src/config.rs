//! Command-line interface and the settings derived from it.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Persona Roster - keep a small list of people (name, surname, age)
///
/// Nothing is saved: the roster lives only as long as the session.
#[derive(Parser, Debug)]
#[command(name = "persona-roster")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error). RUST_LOG overrides it.
    #[arg(long, global = true, env = "PERSONA_ROSTER_LOG", default_value = "info")]
    pub log_level: String,

    /// Write logs to this file
    #[arg(long, global = true, env = "PERSONA_ROSTER_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Print the roster as JSON when the session ends
    #[arg(long, global = true)]
    pub print_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Interactive table and form (default)
    Tui,

    /// Apply comma-separated commands from a file, or stdin
    Script {
        /// Command file; "-" or nothing reads stdin
        file: Option<PathBuf>,
    },
}

impl Cli {
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Tui)
    }

    pub fn logging(&self) -> LoggingSettings {
        let interactive = self.command() == Commands::Tui;

        LoggingSettings {
            level: self.log_level.clone(),
            file: self.log_file.clone(),
            // The TUI owns the terminal; never write logs over it
            stderr: !interactive && self.log_file.is_none(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    pub level: String,
    pub file: Option<PathBuf>,
    pub stderr: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_tui() {
        let cli = Cli::parse_from(["persona-roster"]);
        assert_eq!(cli.command(), Commands::Tui);
        assert!(!cli.print_json);

        let logging = cli.logging();
        assert!(!logging.stderr);
        assert_eq!(logging.file, None);
    }

    #[test]
    fn test_script_with_file_and_flags() {
        let cli = Cli::parse_from([
            "persona-roster",
            "script",
            "people.csv",
            "--print-json",
            "--log-level",
            "debug",
        ]);

        assert_eq!(
            cli.command(),
            Commands::Script {
                file: Some(PathBuf::from("people.csv"))
            }
        );
        assert!(cli.print_json);

        let logging = cli.logging();
        assert_eq!(logging.level, "debug");
        assert!(logging.stderr);
    }

    #[test]
    fn test_log_file_disables_stderr() {
        let cli = Cli::parse_from(["persona-roster", "--log-file", "/tmp/roster.log", "script"]);
        let logging = cli.logging();

        assert!(!logging.stderr);
        assert_eq!(logging.file, Some(PathBuf::from("/tmp/roster.log")));
    }
}
