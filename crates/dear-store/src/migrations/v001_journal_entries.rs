//! v001 -- Initial schema: the journal collection.

use rusqlite::Connection;

const UP_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS journal_entries (
    id              TEXT PRIMARY KEY NOT NULL,  -- server id, or client UUID v4
    title           TEXT NOT NULL,
    content         TEXT NOT NULL,
    mood            TEXT NOT NULL,
    sentiment_score REAL,                       -- server-derived, nullable
    sentiment_label TEXT,                       -- server-derived, nullable
    created_at      TEXT NOT NULL,              -- RFC-3339 UTC, fixed width
    synced          INTEGER NOT NULL DEFAULT 0  -- boolean 0/1
);

CREATE INDEX IF NOT EXISTS idx_journal_entries_created_at
    ON journal_entries(created_at DESC);
"#;

pub fn up(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(UP_SQL)
}
