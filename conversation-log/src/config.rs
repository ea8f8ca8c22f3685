use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DB_PATH: &str = "conversation_history.db";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LogConfig {
    pub database: DatabaseConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                path: PathBuf::from(DEFAULT_DB_PATH),
            },
        }
    }
}

impl LogConfig {
    /// Load configuration from a TOML file. A missing file yields the
    /// defaults; a malformed one is an error.
    pub fn load(config_path: &Path) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .set_default("database.path", DEFAULT_DB_PATH)?
            .add_source(
                File::from(config_path)
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .build()?;

        let mut config: LogConfig = builder.try_deserialize()?;
        config.database.path = expand_tilde(&config.database.path);

        Ok(config)
    }

    /// Replace the database location, e.g. from a command-line flag
    pub fn with_database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.database.path = expand_tilde(&path.into());
        self
    }
}

/// Expand a leading `~` to the home directory
pub fn expand_tilde(path: &Path) -> PathBuf {
    if path.starts_with("~") {
        if let Some(home) = home::home_dir() {
            let path_str = path.to_string_lossy();
            let expanded = path_str.replacen('~', &home.to_string_lossy(), 1);
            return PathBuf::from(expanded);
        }
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = LogConfig::load(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(config, LogConfig::default());
        assert_eq!(config.database.path, PathBuf::from("conversation_history.db"));
    }

    #[test]
    fn test_file_overrides_location() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[database]\npath = \"/var/lib/chapters/history.db\"").unwrap();

        let config = LogConfig::load(file.path()).unwrap();
        assert_eq!(
            config.database.path,
            PathBuf::from("/var/lib/chapters/history.db")
        );
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[database\npath = ").unwrap();

        assert!(LogConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_with_database_path_overrides() {
        let config = LogConfig::default().with_database_path("other.db");
        assert_eq!(config.database.path, PathBuf::from("other.db"));
    }

    #[test]
    fn test_expand_tilde() {
        let plain = Path::new("/tmp/history.db");
        assert_eq!(expand_tilde(plain), plain.to_path_buf());

        if let Some(home) = home::home_dir() {
            assert_eq!(
                expand_tilde(Path::new("~/history.db")),
                home.join("history.db")
            );
        }
    }
}
