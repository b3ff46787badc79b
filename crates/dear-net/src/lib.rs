//! HTTP access to the Dear backend.
//!
//! Each backend area is an async trait ([`AuthApi`], [`JournalApi`],
//! [`ChatApi`], [`UserApi`], [`ContentApi`]) so the repositories can be
//! exercised against fakes; [`ApiClient`] implements all of them over
//! `reqwest`. Every call is a single request/response exchange; failures
//! keep the HTTP status so callers can classify them.

pub mod api;
pub mod client;
pub mod config;
pub mod dto;

mod error;

pub use api::{AuthApi, ChatApi, ContentApi, JournalApi, UserApi};
pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::{ApiError, Result};
