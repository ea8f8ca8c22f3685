#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Invalid message: {0}")]
    InvalidMessage(String),
}

impl From<rusqlite::Error> for LogError {
    fn from(err: rusqlite::Error) -> Self {
        LogError::StorageUnavailable(err.to_string())
    }
}

impl From<refinery::Error> for LogError {
    fn from(err: refinery::Error) -> Self {
        LogError::StorageUnavailable(format!("Migration failed: {}", err))
    }
}

impl From<std::io::Error> for LogError {
    fn from(err: std::io::Error) -> Self {
        LogError::StorageUnavailable(err.to_string())
    }
}
