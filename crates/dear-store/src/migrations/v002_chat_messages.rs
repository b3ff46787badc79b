use rusqlite::Connection;

const UP_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS chat_messages (
    id        TEXT PRIMARY KEY NOT NULL,  -- client UUID v4
    role      TEXT NOT NULL,              -- 'user' | 'assistant'
    content   TEXT NOT NULL,
    timestamp TEXT NOT NULL               -- RFC-3339 UTC, fixed width
);

CREATE INDEX IF NOT EXISTS idx_chat_messages_timestamp
    ON chat_messages(timestamp ASC);
"#;

pub fn up(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(UP_SQL)
}
