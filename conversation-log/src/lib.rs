//! Append-only conversation history stored in SQLite.
//!
//! A [`MessageLog`] keeps every turn of a conversation in insertion order and
//! replays it on demand:
//!
//! ```no_run
//! use conversation_log::MessageLog;
//!
//! let log = MessageLog::open("conversation_history.db")?;
//! log.append("Editor", "What is the title of the chapter?")?;
//! log.append("Author", "The Long Winter")?;
//!
//! for message in log.read_latest(5)? {
//!     println!("{}: {}", message.role, message.content);
//! }
//! # Ok::<(), conversation_log::LogError>(())
//! ```

pub mod config;
pub mod error;
pub mod log;
pub mod migrations;
pub mod models;


pub use config::{DatabaseConfig, LogConfig, DEFAULT_DB_PATH};
pub use error::LogError;
pub use log::MessageLog;
pub use models::Message;
