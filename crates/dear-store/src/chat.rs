//! CRUD operations for [`ChatMessageRecord`] rows.

use rusqlite::{params, Connection};

use dear_shared::{ChatRole, DeliveryStatus};

use crate::database::Database;
use crate::error::{Result, StoreError};
use crate::models::{conversion_failure, decode_timestamp, encode_timestamp, ChatMessageRecord};

const SELECT_COLUMNS: &str = "id, role, content, emotion, timestamp, is_flagged, delivery_status";

impl Database {
    /// Insert the message, or replace the row with the same id.
    pub fn upsert_chat_message(&self, message: &ChatMessageRecord) -> Result<()> {
        upsert(self.conn(), message)
    }

    /// Store an assistant reply and confirm the user message it answers in
    /// one transaction: either both land or neither does.
    ///
    /// Returns `true` if the user message still exists.
    pub fn record_chat_reply(&mut self, message_id: &str, reply: &ChatMessageRecord) -> Result<bool> {
        let tx = self.conn_mut().transaction()?;
        upsert(&tx, reply)?;
        let affected = tx.execute(
            "UPDATE chat_messages SET delivery_status = ?1 WHERE id = ?2",
            params![DeliveryStatus::Confirmed.as_str(), message_id],
        )?;
        tx.commit()?;
        Ok(affected > 0)
    }

    /// The whole conversation, oldest first. Messages sharing a timestamp
    /// keep insertion order.
    pub fn list_chat_messages(&self) -> Result<Vec<ChatMessageRecord>> {
        let mut stmt = self.conn().prepare(&format!(
            "SELECT {SELECT_COLUMNS}
             FROM chat_messages
             ORDER BY timestamp ASC, rowid ASC"
        ))?;

        let rows = stmt.query_map([], row_to_message)?;

        let mut messages = Vec::new();
        for row in rows {
            messages.push(row?);
        }
        Ok(messages)
    }

    pub fn get_chat_message(&self, id: &str) -> Result<ChatMessageRecord> {
        self.conn()
            .query_row(
                &format!("SELECT {SELECT_COLUMNS} FROM chat_messages WHERE id = ?1"),
                params![id],
                row_to_message,
            )
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => StoreError::NotFound,
                other => StoreError::Sqlite(other),
            })
    }

    /// Set the flagged bit. Returns `true` if the message exists.
    pub fn set_chat_flag(&self, id: &str, flagged: bool) -> Result<bool> {
        let affected = self.conn().execute(
            "UPDATE chat_messages SET is_flagged = ?1 WHERE id = ?2",
            params![flagged, id],
        )?;
        Ok(affected > 0)
    }

    /// Set the delivery status. Returns `true` if the message exists.
    pub fn set_delivery_status(&self, id: &str, status: DeliveryStatus) -> Result<bool> {
        let affected = self.conn().execute(
            "UPDATE chat_messages SET delivery_status = ?1 WHERE id = ?2",
            params![status.as_str(), id],
        )?;
        Ok(affected > 0)
    }

    /// Delete a message by id. Returns `true` if a row was deleted.
    pub fn delete_chat_message(&self, id: &str) -> Result<bool> {
        let affected = self
            .conn()
            .execute("DELETE FROM chat_messages WHERE id = ?1", params![id])?;
        Ok(affected > 0)
    }
}

fn upsert(conn: &Connection, message: &ChatMessageRecord) -> Result<()> {
    conn.execute(
        "INSERT INTO chat_messages
             (id, role, content, emotion, timestamp, is_flagged, delivery_status)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
         ON CONFLICT(id) DO UPDATE SET
             role = excluded.role,
             content = excluded.content,
             emotion = excluded.emotion,
             timestamp = excluded.timestamp,
             is_flagged = excluded.is_flagged,
             delivery_status = excluded.delivery_status",
        params![
            message.id,
            message.role.as_str(),
            message.content,
            message.emotion,
            encode_timestamp(&message.timestamp),
            message.flagged,
            message.delivery.as_str(),
        ],
    )?;
    Ok(())
}

fn row_to_message(row: &rusqlite::Row<'_>) -> rusqlite::Result<ChatMessageRecord> {
    let role_str: String = row.get(1)?;
    let ts_str: String = row.get(4)?;
    let status_str: String = row.get(6)?;

    let role: ChatRole = role_str.parse().map_err(|e| conversion_failure(1, e))?;
    let delivery: DeliveryStatus = status_str.parse().map_err(|e| conversion_failure(6, e))?;

    Ok(ChatMessageRecord {
        id: row.get(0)?,
        role,
        content: row.get(2)?,
        emotion: row.get(3)?,
        timestamp: decode_timestamp(4, &ts_str)?,
        flagged: row.get(5)?,
        delivery,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn message(id: &str, role: ChatRole, second: u32) -> ChatMessageRecord {
        ChatMessageRecord {
            id: id.to_string(),
            role,
            content: format!("content {id}"),
            emotion: None,
            timestamp: Utc.with_ymd_and_hms(2024, 2, 1, 9, 0, second).unwrap(),
            flagged: false,
            delivery: DeliveryStatus::Confirmed,
        }
    }

    #[test]
    fn list_is_oldest_first() {
        let db = Database::open_in_memory().unwrap();
        db.upsert_chat_message(&message("b", ChatRole::Assistant, 2)).unwrap();
        db.upsert_chat_message(&message("a", ChatRole::User, 1)).unwrap();

        let ids: Vec<_> = db
            .list_chat_messages()
            .unwrap()
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn equal_timestamps_keep_insertion_order() {
        let db = Database::open_in_memory().unwrap();
        db.upsert_chat_message(&message("user", ChatRole::User, 5)).unwrap();
        db.upsert_chat_message(&message("reply", ChatRole::Assistant, 5)).unwrap();
        db.set_delivery_status("user", DeliveryStatus::Confirmed).unwrap();

        let roles: Vec<_> = db
            .list_chat_messages()
            .unwrap()
            .into_iter()
            .map(|m| m.role)
            .collect();
        assert_eq!(roles, [ChatRole::User, ChatRole::Assistant]);
    }

    #[test]
    fn flag_and_status_updates_touch_only_their_column() {
        let db = Database::open_in_memory().unwrap();
        let original = message("m", ChatRole::User, 0);
        db.upsert_chat_message(&original).unwrap();

        assert!(db.set_chat_flag("m", true).unwrap());
        assert!(db.set_delivery_status("m", DeliveryStatus::Failed).unwrap());
        assert!(!db.set_chat_flag("missing", true).unwrap());

        let stored = db.get_chat_message("m").unwrap();
        assert!(stored.flagged);
        assert_eq!(stored.delivery, DeliveryStatus::Failed);
        assert_eq!(stored.content, original.content);
    }

    #[test]
    fn unknown_role_is_a_conversion_error() {
        let db = Database::open_in_memory().unwrap();
        db.conn()
            .execute(
                "INSERT INTO chat_messages (id, role, content, timestamp)
                 VALUES ('x', 'ai', 'hi', '2024-01-01T00:00:00.000000Z')",
                [],
            )
            .unwrap();

        assert!(matches!(
            db.get_chat_message("x"),
            Err(StoreError::Sqlite(
                rusqlite::Error::FromSqlConversionFailure(1, _, _)
            ))
        ));
    }

    #[test]
    fn reply_and_confirmation_land_together() {
        let mut db = Database::open_in_memory().unwrap();
        let mut user = message("u", ChatRole::User, 0);
        user.delivery = DeliveryStatus::Pending;
        db.upsert_chat_message(&user).unwrap();

        assert!(db.record_chat_reply("u", &message("r", ChatRole::Assistant, 1)).unwrap());

        assert_eq!(db.get_chat_message("u").unwrap().delivery, DeliveryStatus::Confirmed);
        assert_eq!(db.list_chat_messages().unwrap().len(), 2);
    }

    #[test]
    fn failed_confirmation_rolls_back_the_reply() {
        let mut db = Database::open_in_memory().unwrap();
        let mut user = message("u", ChatRole::User, 0);
        user.delivery = DeliveryStatus::Pending;
        db.upsert_chat_message(&user).unwrap();
        db.conn()
            .execute_batch(
                "CREATE TRIGGER refuse_confirm BEFORE UPDATE OF delivery_status ON chat_messages
                 WHEN NEW.delivery_status = 'confirmed'
                 BEGIN SELECT RAISE(ABORT, 'disk full'); END;",
            )
            .unwrap();

        assert!(db.record_chat_reply("u", &message("r", ChatRole::Assistant, 1)).is_err());

        let remaining = db.list_chat_messages().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].delivery, DeliveryStatus::Pending);
    }

    #[test]
    fn delete_removes_row() {
        let db = Database::open_in_memory().unwrap();
        db.upsert_chat_message(&message("m", ChatRole::User, 0)).unwrap();
        assert!(db.delete_chat_message("m").unwrap());
        assert!(matches!(db.get_chat_message("m"), Err(StoreError::NotFound)));
    }
}
