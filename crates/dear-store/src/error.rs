use thiserror::Error;

/// Errors produced by the local store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// SQLite failure, including a stored value that no longer decodes
    /// (unknown role, malformed timestamp).
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// The platform offers no per-user data directory for `dear.db`.
    #[error("Could not determine application data directory")]
    NoDataDir,

    /// Creating the data directory failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No journal or chat message has the requested id.
    #[error("Record not found")]
    NotFound,

    /// A schema upgrade step failed; carries the step name.
    #[error("Migration error: {0}")]
    Migration(String),

    /// A writer panicked while holding the shared connection.
    #[error("Database lock poisoned")]
    Poisoned,

    /// The blocking task running a store operation panicked or was cancelled.
    #[error("Store task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, StoreError>;
