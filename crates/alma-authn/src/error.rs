//! Error types for the verification client.
//!
//! Configuration problems are hard failures and surface as `Err` from
//! constructors. Transport and parse failures never cross the public
//! boundary as errors; [`CredentialVerifier`](crate::CredentialVerifier)
//! converts them into a classified
//! [`VerificationOutcome`](crate::VerificationOutcome).

use reqwest::StatusCode;

/// Configuration errors. Indicate a deployment defect, not a runtime
/// credential event, so they fail fast before any network call.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The API root URL is missing or empty.
    #[error("api_root is not set")]
    MissingApiRoot,

    /// The API key is missing or empty.
    #[error("apikey is not set")]
    MissingApiKey,

    /// The API root is not a valid absolute URL.
    #[error("api_root is not a valid URL: {reason}")]
    InvalidApiRoot { reason: String },

    /// The HTTP client could not be constructed.
    #[error("failed to create HTTP client: {message}")]
    HttpClient { message: String },
}

/// Transport-level failures from a single backend round-trip.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Could not establish a connection to the backend.
    #[error("connection failed: {message}")]
    Connect { message: String },

    /// The request exceeded the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The backend answered with a non-2xx status.
    #[error("backend returned HTTP {status}")]
    Status { status: StatusCode },

    /// The response body could not be read.
    #[error("failed to read response body: {message}")]
    Body { message: String },

    /// Any other network-level failure.
    #[error("network error: {message}")]
    Network { message: String },
}

impl TransportError {
    /// Whether this failure means the backend rejected the credentials,
    /// as opposed to being unable to answer. Alma reports a bad password
    /// or unknown user as a 4xx on the auth call.
    pub fn is_credential_rejection(&self) -> bool {
        matches!(self, Self::Status { status } if status.is_client_error())
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        // The URL is stripped before stringifying: the auth URL carries the
        // password and API key in its query string.
        let err = err.without_url();
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connect {
                message: err.to_string(),
            }
        } else {
            Self::Network {
                message: err.to_string(),
            }
        }
    }
}

/// Failures mapping a backend response body into a user record.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The body is not valid JSON (or not the expected shape).
    #[error("malformed user response: {message}")]
    Json { message: String },

    /// A required field is absent or empty.
    #[error("user response is missing required field `{field}`")]
    MissingField { field: &'static str },
}
