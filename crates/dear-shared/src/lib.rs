//! Types shared by every Dear crate: domain entities, enums that cross the
//! storage and network boundaries, constants and the questionnaire banks.

pub mod constants;
pub mod error;
pub mod models;
pub mod questionnaire;
pub mod types;

pub use error::QuestionnaireError;
pub use models::*;
pub use types::{ChatRole, DeliveryStatus};
