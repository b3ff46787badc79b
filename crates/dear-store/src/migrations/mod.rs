//! Database migration runner.
//!
//! Migrations are executed in order on every open. Each one is guarded by the
//! `user_version` pragma so it runs exactly once, and a step commits together
//! with its version bump so a failure leaves neither behind. Schema changes are additive
//! only: new tables and new nullable or defaulted columns, so rows written by
//! an older build survive the upgrade.

pub mod v001_journal_entries;
pub mod v002_chat_messages;
pub mod v003_chat_emotion;
pub mod v004_chat_flag;
pub mod v005_delivery_preferences;

use rusqlite::Connection;

use crate::error::{Result, StoreError};

type Migration = fn(&Connection) -> std::result::Result<(), rusqlite::Error>;

/// Ordered list of migrations; entry `i` upgrades version `i` to `i + 1`.
const MIGRATIONS: &[(&str, Migration)] = &[
    ("v001_journal_entries", v001_journal_entries::up),
    ("v002_chat_messages", v002_chat_messages::up),
    ("v003_chat_emotion", v003_chat_emotion::up),
    ("v004_chat_flag", v004_chat_flag::up),
    ("v005_delivery_preferences", v005_delivery_preferences::up),
];

/// Current schema version.
pub const CURRENT_VERSION: u32 = MIGRATIONS.len() as u32;

/// Run all pending migrations against the open connection.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    apply(conn, MIGRATIONS)
}

fn apply(conn: &Connection, migrations: &[(&str, Migration)]) -> Result<()> {
    let current: u32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    tracing::info!(
        current_version = current,
        target_version = migrations.len(),
        "checking database migrations"
    );

    for (index, (name, up)) in migrations.iter().enumerate() {
        let version = index as u32 + 1;
        if current >= version {
            continue;
        }
        tracing::info!(migration = name, "applying migration");
        let tx = conn.unchecked_transaction()?;
        up(&tx).map_err(|e| StoreError::Migration(format!("{name}: {e}")))?;
        tx.pragma_update(None, "user_version", version)?;
        tx.commit()?;
    }

    Ok(())
}
