use rusqlite::Connection;

const UP_SQL: &str = r#"
ALTER TABLE chat_messages ADD COLUMN emotion TEXT;
"#;

pub fn up(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(UP_SQL)
}
