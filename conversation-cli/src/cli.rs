use clap::{Parser, Subcommand};
use conversation_log::{LogConfig, MessageLog};
use std::io::Write;
use std::path::PathBuf;

use crate::{commands, error::CliError};
use commands::*;

#[derive(Debug, Parser)]
#[command(name = "conversation-log")]
#[command(about = "Inspect and edit a persisted conversation history")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Database file holding the history (overrides the configured path)
    #[arg(long, global = true)]
    pub database: Option<PathBuf>,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Append a message to the history
    Append {
        /// Speaker of the message, e.g. "Editor" or "Author"
        role: String,

        /// Message text
        content: String,
    },

    /// Print the history, oldest first
    History {
        /// Only show the N most recent messages
        #[arg(short, long)]
        latest: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Delete every message in the history
    Clear,

    /// Print the number of stored messages
    Count,

    /// Show the effective configuration
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

impl Cli {
    pub fn run(&self) -> Result<(), CliError> {
        let mut stdout = std::io::stdout().lock();

        match &self.command {
            Some(Commands::Append { role, content }) => {
                append_message(&self.open_log()?, role, content, &mut stdout)
            }
            Some(Commands::History { latest, format }) => {
                show_history(&self.open_log()?, *latest, *format, &mut stdout)
            }
            Some(Commands::Clear) => clear_history(&self.open_log()?, &mut stdout),
            Some(Commands::Count) => count_messages(&self.open_log()?, &mut stdout),
            Some(Commands::Config) => show_config(&self.load_config()?, &mut stdout),
            None => {
                // No subcommand provided, show help
                writeln!(stdout, "conversation-log - persisted conversation history")?;
                writeln!(stdout, "Run 'conversation-log --help' for usage information.")?;
                Ok(())
            }
        }
    }

    /// Resolve the configuration: config file first, then `--database`.
    pub fn load_config(&self) -> Result<LogConfig, CliError> {
        let config = match &self.config {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                LogConfig::load(path)?
            }
            None => LogConfig::load(&default_config_path())?,
        };

        Ok(match &self.database {
            Some(path) => config.with_database_path(path),
            None => config,
        })
    }

    fn open_log(&self) -> Result<MessageLog, CliError> {
        let config = self.load_config()?;
        Ok(MessageLog::open(&config.database.path)?)
    }
}

fn default_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("conversation-log/config.toml")
    } else {
        PathBuf::from("conversation-log.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_history_flags() {
        let cli = Cli::parse_from([
            "conversation-log",
            "history",
            "--latest",
            "3",
            "--format",
            "json",
        ]);

        match cli.command {
            Some(Commands::History { latest, format }) => {
                assert_eq!(latest, Some(3));
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_history_defaults_to_text() {
        let cli = Cli::parse_from(["conversation-log", "history"]);
        assert!(matches!(
            cli.command,
            Some(Commands::History {
                latest: None,
                format: OutputFormat::Text
            })
        ));
    }

    #[test]
    fn test_global_database_flag_after_subcommand() {
        let cli = Cli::parse_from(["conversation-log", "count", "--database", "chapter.db"]);
        assert_eq!(cli.database, Some(PathBuf::from("chapter.db")));
        assert!(matches!(cli.command, Some(Commands::Count)));
    }

    #[test]
    fn test_database_flag_overrides_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[database]\npath = \"from-file.db\"").unwrap();
        let config_path = file.path().to_str().unwrap();

        let cli = Cli::parse_from(["conversation-log", "--config", config_path, "config"]);
        assert_eq!(
            cli.load_config().unwrap().database.path,
            PathBuf::from("from-file.db")
        );

        let cli = Cli::parse_from([
            "conversation-log",
            "--config",
            config_path,
            "--database",
            "from-flag.db",
            "config",
        ]);
        assert_eq!(
            cli.load_config().unwrap().database.path,
            PathBuf::from("from-flag.db")
        );
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let missing = missing.to_str().unwrap();

        let cli = Cli::parse_from(["conversation-log", "--config", missing, "config"]);
        let err = cli.load_config().unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
