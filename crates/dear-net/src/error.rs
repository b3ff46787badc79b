use thiserror::Error;

/// Errors produced by the remote API client.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The configured base URL is unusable.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Connection failure, timeout, or any other transport problem.
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not have the expected shape.
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status of the failed exchange, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 401, 403 and 404 all mean the session token is no longer accepted.
    pub fn is_session_invalid(&self) -> bool {
        matches!(self.status(), Some(401 | 403 | 404))
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Transport(e)
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ApiError>;
