//! # dear-client
//!
//! The local-first core of the Dear client: repositories that reconcile the
//! on-device store with the backend, the use cases the UI calls, the error
//! taxonomy those calls report, and the composition root that wires the
//! concrete store and HTTP client together.
//!
//! Repositories depend only on the `dear-net` traits and the `dear-store`
//! facades, so every flow can be driven by fakes in tests.

pub mod app;
pub mod config;
pub mod error;
pub mod mappers;
pub mod repository;
pub mod session;
pub mod use_cases;

#[cfg(test)]
mod testing;

use tracing_subscriber::{fmt, EnvFilter};

pub use app::{Backend, DearApp};
pub use config::ClientConfig;
pub use error::{DearError, MappingError, Result, UserMessage, ValidationError};
pub use session::SessionState;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set. Calling this more than once is harmless; only
/// the first call installs a subscriber.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("dear_client=debug,dear_net=debug,dear_store=info,warn")
    });

    let installed = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("Starting {}", dear_shared::constants::APP_NAME);
    }
}
