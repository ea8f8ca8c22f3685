/// Create the messages table holding every conversation turn
///
/// `timestamp` is Unix milliseconds (UTC). AUTOINCREMENT keeps ids from being
/// reused after the table is cleared.
pub fn migration() -> String {
    r#"
CREATE TABLE messages (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    role TEXT NOT NULL CHECK (role <> ''),
    content TEXT NOT NULL CHECK (content <> ''),
    timestamp INTEGER NOT NULL
);

CREATE INDEX idx_messages_timestamp_id
    ON messages(timestamp, id);
"#
    .to_string()
}
