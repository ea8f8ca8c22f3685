//! Commands that change the log: append and clear

use crate::error::CliError;
use conversation_log::MessageLog;
use std::io::Write;
use tracing::info;

/// Append one message and print its id
pub fn append_message(
    log: &MessageLog,
    role: &str,
    content: &str,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let id = log.append(role, content)?;
    writeln!(out, "{id}")?;
    Ok(())
}

/// Clear the log
pub fn clear_history(log: &MessageLog, out: &mut impl Write) -> Result<(), CliError> {
    log.clear()?;

    info!("Conversation history cleared");
    writeln!(out, "Conversation history cleared.")?;
    Ok(())
}

/// Print the number of stored messages
pub fn count_messages(log: &MessageLog, out: &mut impl Write) -> Result<(), CliError> {
    writeln!(out, "{}", log.count()?)?;
    Ok(())
}
