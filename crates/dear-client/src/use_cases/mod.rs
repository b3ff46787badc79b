//! One struct per user-facing operation.
//!
//! Use cases validate input before any I/O and otherwise hand the
//! repository result through unchanged.

pub mod auth;
pub mod chat;
pub mod content;
pub mod journal;
pub mod onboarding;
pub mod services;
pub mod user;

use crate::error::ValidationError;

/// Reject empty or whitespace-only input.
fn require_filled(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        tracing::debug!(field, "rejected blank input");
        return Err(ValidationError::Blank(field));
    }
    Ok(())
}
