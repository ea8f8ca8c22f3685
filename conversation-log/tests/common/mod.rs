use conversation_log::MessageLog;
use std::path::PathBuf;
use tempfile::TempDir;

/// A file-backed log in its own temporary directory.
///
/// The TempDir must be kept alive for the duration of the test
pub struct TestLog {
    pub dir: TempDir,
    pub path: PathBuf,
    pub log: MessageLog,
}

pub fn setup_test_log() -> anyhow::Result<TestLog> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("conversation_history.db");
    let log = MessageLog::open(&path)?;

    Ok(TestLog { dir, path, log })
}

/// Contents of the given messages, in order
pub fn contents(messages: &[conversation_log::Message]) -> Vec<String> {
    messages.iter().map(|m| m.content.clone()).collect()
}
