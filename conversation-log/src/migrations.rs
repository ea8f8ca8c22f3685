use refinery::embed_migrations;

// Embed migrations from the migrations directory
embed_migrations!("src/migrations");

/// Run the message log migrations on a connection.
///
/// Already-applied versions are recorded in `refinery_schema_history` and
/// skipped, so running this against an existing log is a no-op.
pub fn run_migrations(conn: &mut rusqlite::Connection) -> Result<(), refinery::Error> {
    migrations::runner().run(conn).map(|_| ())
}

/// Check if the messages table exists in the database
pub(crate) fn has_message_schema(conn: &rusqlite::Connection) -> rusqlite::Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='messages'")?;
    stmt.exists([])
}
