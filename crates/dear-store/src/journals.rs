//! CRUD operations for [`JournalRecord`] rows.

use rusqlite::{params, Connection};

use crate::database::Database;
use crate::error::{Result, StoreError};
use crate::models::{decode_timestamp, encode_timestamp, JournalRecord};

const UPSERT_SQL: &str = "INSERT INTO journal_entries
         (id, title, content, mood, sentiment_score, sentiment_label, created_at, synced)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
     ON CONFLICT(id) DO UPDATE SET
         title = excluded.title,
         content = excluded.content,
         mood = excluded.mood,
         sentiment_score = excluded.sentiment_score,
         sentiment_label = excluded.sentiment_label,
         created_at = excluded.created_at,
         synced = excluded.synced";

const SELECT_COLUMNS: &str =
    "id, title, content, mood, sentiment_score, sentiment_label, created_at, synced";

impl Database {
    // ------------------------------------------------------------------
    // Write
    // ------------------------------------------------------------------

    /// Insert the record, or replace the row with the same id.
    pub fn upsert_journal(&self, journal: &JournalRecord) -> Result<()> {
        upsert(self.conn(), journal)
    }

    /// Upsert every record inside one transaction: either all land or none.
    pub fn upsert_journals(&mut self, journals: &[JournalRecord]) -> Result<()> {
        let tx = self.conn_mut().transaction()?;
        for journal in journals {
            upsert(&tx, journal)?;
        }
        tx.commit()?;
        Ok(())
    }

    /// Delete a journal by id. Returns `true` if a row was deleted.
    pub fn delete_journal(&self, id: &str) -> Result<bool> {
        let affected = self
            .conn()
            .execute("DELETE FROM journal_entries WHERE id = ?1", params![id])?;
        Ok(affected > 0)
    }

    // ------------------------------------------------------------------
    // Read
    // ------------------------------------------------------------------

    /// All journals, newest first.
    pub fn list_journals(&self) -> Result<Vec<JournalRecord>> {
        let mut stmt = self.conn().prepare(&format!(
            "SELECT {SELECT_COLUMNS}
             FROM journal_entries
             ORDER BY created_at DESC, rowid DESC"
        ))?;

        let rows = stmt.query_map([], row_to_journal)?;

        let mut journals = Vec::new();
        for row in rows {
            journals.push(row?);
        }
        Ok(journals)
    }

    /// Fetch a single journal by id.
    pub fn get_journal(&self, id: &str) -> Result<JournalRecord> {
        self.conn()
            .query_row(
                &format!("SELECT {SELECT_COLUMNS} FROM journal_entries WHERE id = ?1"),
                params![id],
                row_to_journal,
            )
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => StoreError::NotFound,
                other => StoreError::Sqlite(other),
            })
    }
}

fn upsert(conn: &Connection, journal: &JournalRecord) -> Result<()> {
    conn.execute(
        UPSERT_SQL,
        params![
            journal.id,
            journal.title,
            journal.content,
            journal.mood,
            journal.sentiment_score,
            journal.sentiment_label,
            encode_timestamp(&journal.created_at),
            journal.synced,
        ],
    )?;
    Ok(())
}

fn row_to_journal(row: &rusqlite::Row<'_>) -> rusqlite::Result<JournalRecord> {
    let created_str: String = row.get(6)?;

    Ok(JournalRecord {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        mood: row.get(3)?,
        sentiment_score: row.get(4)?,
        sentiment_label: row.get(5)?,
        created_at: decode_timestamp(6, &created_str)?,
        synced: row.get(7)?,
    })
}
