/// Application name
pub const APP_NAME: &str = "Dear";

/// Base URL of the backend used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://10.0.2.2:8000/api/v1/";

/// HTTP connect timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// HTTP read timeout in seconds (assistant replies are slow to generate)
pub const DEFAULT_READ_TIMEOUT_SECS: u64 = 60;

/// HTTP write timeout in seconds
pub const DEFAULT_WRITE_TIMEOUT_SECS: u64 = 30;

/// Database file name inside the data directory
pub const DATABASE_FILE: &str = "dear.db";

/// Preference key holding the bearer token
pub const PREF_AUTH_TOKEN: &str = "auth_token";

/// Preference key holding the onboarding flag
pub const PREF_ONBOARDING_COMPLETED: &str = "onboarding_completed";

/// Mood reported by growth statistics when there are no journals
pub const NO_MOOD: &str = "-";
