//! Configuration display

use crate::error::CliError;
use conversation_log::LogConfig;
use std::io::Write;

/// Print the effective configuration as TOML
pub fn show_config(config: &LogConfig, out: &mut impl Write) -> Result<(), CliError> {
    let rendered = toml::to_string_pretty(config)?;
    write!(out, "{rendered}")?;
    Ok(())
}
