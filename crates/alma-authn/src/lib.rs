//! Credential verification against the Ex Libris Alma user API.
//!
//! Given a username/password pair, the verifier runs the two-call Alma
//! sequence — an authentication POST (`op=auth`), then a user-record GET —
//! and returns a single classified [`VerificationOutcome`]:
//!
//! - `Success` with the canonical primary id, display name, and user group
//!   label (only when the password was accepted AND the account is ACTIVE)
//! - `InvalidCredentials` when the backend rejects the pair
//! - `AccountInactive` when the password is right but the account is not
//! - `BackendError` for transport, timeout, and malformed-response failures
//! - `Cancelled` when the caller aborts mid-flight
//!
//! The verifier never raises across its public boundary; only configuration
//! defects are hard errors, and those fail at construction before any
//! network I/O. Password material never appears in outcomes, logs, or
//! error details.
//!
//! # Quick Start
//!
//! ```no_run
//! use alma_authn::{AlmaConfig, CredentialVerifier, Credentials, VerificationOutcome};
//!
//! # async fn example() -> Result<(), alma_authn::ConfigError> {
//! let config = AlmaConfig::from_env();
//! let verifier = CredentialVerifier::new(config)?;
//!
//! let creds = Credentials::new("jdoe123", "correct horse");
//! match verifier.verify(&creds).await {
//!     VerificationOutcome::Success { primary_id, .. } => {
//!         println!("verified as {}", primary_id);
//!     }
//!     other => println!("login refused: {:?}", other),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! | Environment Variable | Description |
//! |---------------------|-------------|
//! | `ALMA_API_ROOT` | Base URL of the Alma REST API |
//! | `ALMA_APIKEY` | API key for the users endpoint |
//! | `ALMA_TIMEOUT_SECS` | Connect/request timeout in seconds (default: 10) |
//!
//! Environment access happens only in [`AlmaConfig::from_env`]; the
//! verifier itself takes an explicit config.

pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod outcome;
pub mod request;
pub mod user;

// Re-export main types
pub use client::CredentialVerifier;
pub use config::AlmaConfig;
pub use credentials::Credentials;
pub use error::{ConfigError, ParseError, TransportError};
pub use outcome::VerificationOutcome;
pub use user::{parse_user, RemoteUser, UserStatus};
