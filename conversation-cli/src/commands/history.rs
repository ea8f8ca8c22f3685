//! History display

use crate::{cli::OutputFormat, error::CliError};
use conversation_log::{Message, MessageLog};
use std::io::Write;

/// Print all messages, or only the latest `latest` of them, oldest first
pub fn show_history(
    log: &MessageLog,
    latest: Option<usize>,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let messages = match latest {
        Some(limit) => log.read_latest(limit)?,
        None => log.read_all()?,
    };

    match format {
        OutputFormat::Text => render_text(&messages, out),
        OutputFormat::Json => render_json(&messages, out),
    }
}

fn render_text(messages: &[Message], out: &mut impl Write) -> Result<(), CliError> {
    if messages.is_empty() {
        writeln!(out, "No conversation history.")?;
        return Ok(());
    }

    for message in messages {
        writeln!(out, "{}: {}", message.role, message.content)?;
    }
    Ok(())
}

fn render_json(messages: &[Message], out: &mut impl Write) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, messages)?;
    writeln!(out)?;
    Ok(())
}
