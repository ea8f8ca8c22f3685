use crate::error::LogError;
use crate::migrations::{has_message_schema, run_migrations};
use crate::models::Message;
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info, warn};

/// Append-only, timestamp-ordered store of conversation messages.
///
/// Each public operation holds the connection for its whole duration, so
/// calls never observe each other's partial effects.
pub struct MessageLog {
    connection: Mutex<Connection>,
    location: Option<PathBuf>,
}

impl MessageLog {
    /// Open the log stored at `location`, creating the file and schema on
    /// first use. Re-opening an existing log keeps its messages.
    pub fn open<P: AsRef<Path>>(location: P) -> Result<Self, LogError> {
        let path = location.as_ref();

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        let log = Self::with_connection(conn, Some(path.to_path_buf()))?;

        info!(path = %path.display(), "Opened message log");
        Ok(log)
    }

    /// Open a private in-memory log
    pub fn open_in_memory() -> Result<Self, LogError> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn, None)
    }

    fn with_connection(mut conn: Connection, location: Option<PathBuf>) -> Result<Self, LogError> {
        run_migrations(&mut conn)?;
        if !has_message_schema(&conn)? {
            return Err(LogError::StorageUnavailable(
                "messages table missing after migration".to_string(),
            ));
        }

        Ok(MessageLog {
            connection: Mutex::new(conn),
            location,
        })
    }

    /// Path backing this log, `None` when in memory
    pub fn location(&self) -> Option<&Path> {
        self.location.as_deref()
    }

    fn connection(&self) -> Result<MutexGuard<'_, Connection>, LogError> {
        self.connection
            .lock()
            .map_err(|e| LogError::StorageUnavailable(format!("Lock error: {}", e)))
    }

    /// Append a message and return its id.
    ///
    /// The timestamp is the current time, raised to the latest stored
    /// timestamp if the clock has gone backwards.
    pub fn append(&self, role: &str, content: &str) -> Result<i64, LogError> {
        if role.is_empty() {
            warn!("Rejected message with empty role");
            return Err(LogError::InvalidMessage("role must not be empty".to_string()));
        }
        if content.is_empty() {
            warn!(role, "Rejected message with empty content");
            return Err(LogError::InvalidMessage(
                "content must not be empty".to_string(),
            ));
        }

        let conn = self.connection()?;
        let now = chrono::Utc::now().timestamp_millis();

        conn.execute(
            "INSERT INTO messages (role, content, timestamp)
                VALUES (?1, ?2, MAX(?3, COALESCE((SELECT MAX(timestamp) FROM messages), ?3)))",
            params![role, content, now],
        )?;

        let id = conn.last_insert_rowid();
        debug!(id, role, "Appended message");
        Ok(id)
    }

    /// All messages, oldest first
    pub fn read_all(&self) -> Result<Vec<Message>, LogError> {
        let conn = self.connection()?;
        let mut stmt = conn.prepare(
            "SELECT id, role, content, timestamp
                FROM messages
                ORDER BY timestamp ASC, id ASC",
        )?;

        let messages = stmt
            .query_map([], Message::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = messages.len(), "Read all messages");
        Ok(messages)
    }

    /// The `limit` most recent messages, oldest of them first.
    pub fn read_latest(&self, limit: usize) -> Result<Vec<Message>, LogError> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let conn = self.connection()?;
        let mut stmt = conn.prepare(
            "SELECT id, role, content, timestamp
                FROM messages
                ORDER BY timestamp DESC, id DESC
                LIMIT ?1",
        )?;

        let sql_limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let mut messages = stmt
            .query_map([sql_limit], Message::from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        messages.reverse();

        debug!(limit, count = messages.len(), "Read latest messages");
        Ok(messages)
    }

    /// Number of stored messages
    pub fn count(&self) -> Result<usize, LogError> {
        let conn = self.connection()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM messages", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    /// Delete every message. The schema stays in place and ids keep
    /// increasing from where they left off.
    pub fn clear(&self) -> Result<(), LogError> {
        let conn = self.connection()?;
        let removed = conn.execute("DELETE FROM messages", [])?;
        debug!(removed, "Cleared message log");
        Ok(())
    }
}
