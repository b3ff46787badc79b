//! # dear-store
//!
//! On-device storage for the Dear client, backed by SQLite.
//!
//! Two layers live here. [`Database`] wraps a `rusqlite::Connection`, runs the
//! schema migrations and exposes synchronous typed CRUD helpers for journal
//! entries, chat messages and preferences. [`LocalStore`] and
//! [`PreferenceStore`] sit on top of a shared `Database` and add the async,
//! observable surface the repositories consume: every successful write is
//! pushed to all current subscribers without an explicit refresh.

pub mod chat;
pub mod database;
pub mod journals;
pub mod live;
pub mod migrations;
pub mod models;
pub mod preferences;

mod error;

pub use database::{Database, SharedDatabase};
pub use error::{Result, StoreError};
pub use live::LocalStore;
pub use models::*;
pub use preferences::PreferenceStore;
