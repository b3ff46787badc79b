//! v005 -- Chat delivery tracking and the preference table.
//!
//! Rows that predate delivery tracking were only ever shown after the old
//! send flow completed, so they default to `confirmed`.

use rusqlite::Connection;

const UP_SQL: &str = r#"
ALTER TABLE chat_messages ADD COLUMN delivery_status TEXT NOT NULL DEFAULT 'confirmed';

CREATE TABLE IF NOT EXISTS preferences (
    key   TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL
);
"#;

pub fn up(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(UP_SQL)
}
