//! The error taxonomy every repository and use case reports.

use thiserror::Error;

use dear_net::ApiError;
use dear_shared::QuestionnaireError;
use dear_store::StoreError;

/// Input rejected before any I/O happened.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    Blank(&'static str),

    /// Only user messages that failed, or are pending with no delivery running,
    /// can be sent again.
    #[error("message {0} is not awaiting a retry")]
    NotRetryable(String),

    #[error(transparent)]
    Answers(#[from] QuestionnaireError),
}

/// A server value the mapping layer could not translate.
#[derive(Error, Debug)]
pub enum MappingError {
    #[error("malformed timestamp {raw:?}: {source}")]
    Timestamp {
        raw: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Failure of a repository or use-case call.
#[derive(Error, Debug)]
pub enum DearError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// The backend no longer accepts the stored session; the token has been
    /// cleared and the user has to log in again.
    #[error("Session expired")]
    Unauthorized,

    /// The backend could not be reached or did not answer in time.
    #[error("Network error: {0}")]
    Network(#[source] ApiError),

    /// The backend answered, but not with what was asked for.
    #[error("Remote error: {0}")]
    Remote(#[source] ApiError),

    /// A local record the caller referred to does not exist.
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Mapping error: {0}")]
    Mapping(#[from] MappingError),
}

impl From<ApiError> for DearError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Transport(_) => Self::Network(e),
            _ => Self::Remote(e),
        }
    }
}

/// What the UI should tell the user about a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserMessage {
    /// Session is gone; send the user to the login screen.
    Unauthorized,
    Network,
    Validation(String),
    Unknown,
}

impl DearError {
    pub fn user_message(&self) -> UserMessage {
        match self {
            Self::Unauthorized => UserMessage::Unauthorized,
            Self::Remote(e) if e.is_session_invalid() => UserMessage::Unauthorized,
            Self::Network(_) => UserMessage::Network,
            Self::Validation(e) => UserMessage::Validation(e.to_string()),
            _ => UserMessage::Unknown,
        }
    }

    pub(crate) fn not_found(kind: &'static str, id: &str) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DearError>;
