//! The credential verifier: two ordered calls against the Alma user API.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::config::AlmaConfig;
use crate::credentials::Credentials;
use crate::error::{ConfigError, TransportError};
use crate::outcome::VerificationOutcome;
use crate::request;
use crate::user::{self, UserStatus};

/// User agent for backend requests.
const USER_AGENT_VALUE: &str = concat!("alma-authn/", env!("CARGO_PKG_VERSION"));

/// Verifies a username/password pair against the Alma user API.
///
/// Stateless apart from the immutable config; a single instance is safe to
/// share across concurrent verification calls. Each call is single-shot:
/// an authentication POST (authoritative for the password), then a user
/// fetch GET (authoritative for identity and active status). The fetch is
/// never skipped after a successful auth, because status gating must happen
/// before a login counts as successful.
#[derive(Debug, Clone)]
pub struct CredentialVerifier {
    /// HTTP client.
    client: reqwest::Client,

    /// Configuration, validated at construction.
    config: AlmaConfig,
}

impl CredentialVerifier {
    /// Create a verifier from a validated config.
    ///
    /// Fails fast on missing or invalid configuration; no network I/O
    /// happens here.
    pub fn new(config: AlmaConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let timeout = Duration::from_secs(config.timeout_secs);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .default_headers(default_headers)
            .build()
            .map_err(|e| ConfigError::HttpClient {
                message: e.without_url().to_string(),
            })?;

        Ok(Self { client, config })
    }

    /// Create a verifier from environment variables (see
    /// [`AlmaConfig::from_env`]).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(AlmaConfig::from_env())
    }

    /// Verify a credential pair.
    ///
    /// Never returns an error: every transport and parse failure is
    /// classified into a [`VerificationOutcome`] variant. Retry policy is
    /// the caller's; nothing is retried here.
    pub async fn verify(&self, creds: &Credentials) -> VerificationOutcome {
        debug!(username = %creds.username, "attempting to authenticate user");

        // Step 1: the auth call decides whether the password is correct.
        let auth_url = match request::auth_url(creds, &self.config) {
            Ok(url) => url,
            Err(e) => return config_defect(&e),
        };
        debug!(url = %request::redacted(&auth_url), "issuing auth request");

        match self.execute(self.client.post(auth_url)).await {
            Ok(_) => {}
            Err(e) if e.is_credential_rejection() => {
                info!(username = %creds.username, "backend rejected credentials");
                return VerificationOutcome::InvalidCredentials;
            }
            Err(e) => {
                warn!(username = %creds.username, error = %e, "auth call failed");
                return VerificationOutcome::BackendError {
                    detail: e.to_string(),
                };
            }
        }

        // Step 2: fetch the user record. The password was accepted, so any
        // failure from here on is a backend problem, not a credential one.
        let fetch_url = match request::fetch_url(creds, &self.config) {
            Ok(url) => url,
            Err(e) => return config_defect(&e),
        };
        debug!(url = %request::redacted(&fetch_url), "fetching user record");

        let body = match self.execute(self.client.get(fetch_url)).await {
            Ok(body) => body,
            Err(e) => {
                warn!(username = %creds.username, error = %e, "user fetch failed");
                return VerificationOutcome::BackendError {
                    detail: e.to_string(),
                };
            }
        };

        let user = match user::parse_user(&body) {
            Ok(user) => user,
            Err(e) => {
                warn!(username = %creds.username, error = %e, "user record unusable");
                return VerificationOutcome::BackendError {
                    detail: e.to_string(),
                };
            }
        };

        // Step 3: non-active members cannot authenticate.
        if user.status != UserStatus::Active {
            info!(username = %creds.username, "user does not have active status");
            return VerificationOutcome::AccountInactive;
        }

        // The user may have typed a member number rather than the username;
        // the principal is always the canonical primary id.
        info!(primary_id = %user.primary_id, "login succeeded");
        let user_group_label = user.user_group_label();
        VerificationOutcome::Success {
            primary_id: user.primary_id,
            display_name: user.display_name,
            user_group_label,
        }
    }

    /// Verify a credential pair, aborting when `cancel` fires.
    ///
    /// Cancellation drops the in-flight HTTP call and yields
    /// [`VerificationOutcome::Cancelled`]; a partially completed
    /// verification never leaks out as any other variant.
    pub async fn verify_with_cancel(
        &self,
        creds: &Credentials,
        cancel: &CancellationToken,
    ) -> VerificationOutcome {
        tokio::select! {
            _ = cancel.cancelled() => {
                debug!(username = %creds.username, "verification cancelled");
                VerificationOutcome::Cancelled
            }
            outcome = self.verify(creds) => outcome,
        }
    }

    /// Execute one request and return the response body on 2xx.
    ///
    /// Single attempt, bounded by the configured timeout. Non-2xx statuses,
    /// timeouts, connection failures, and unreadable bodies each classify
    /// as their own [`TransportError`] variant.
    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<String, TransportError> {
        let response = request.send().await?;
        let status = response.status();
        debug!(status = %status, "backend returned status");

        if !status.is_success() {
            return Err(TransportError::Status { status });
        }

        response
            .text()
            .await
            .map_err(|e| TransportError::Body {
                message: e.without_url().to_string(),
            })
    }
}

/// The config is validated in `new`, so the builders cannot fail for a
/// constructed verifier; the branch still classifies instead of panicking.
fn config_defect(err: &ConfigError) -> VerificationOutcome {
    warn!(error = %err, "configuration invalid at call time");
    VerificationOutcome::BackendError {
        detail: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AlmaConfig {
        AlmaConfig::default()
            .with_api_root("https://alma.example.edu/almaws/v1")
            .with_api_key("l8xx-key")
    }

    #[test]
    fn new_rejects_missing_config() {
        assert!(matches!(
            CredentialVerifier::new(AlmaConfig::default()),
            Err(ConfigError::MissingApiRoot)
        ));

        let no_key = AlmaConfig::default().with_api_root("https://alma.example.edu/v1");
        assert!(matches!(
            CredentialVerifier::new(no_key),
            Err(ConfigError::MissingApiKey)
        ));
    }

    #[test]
    fn new_accepts_valid_config() {
        assert!(CredentialVerifier::new(config()).is_ok());
    }

    #[test]
    fn verifier_is_cloneable_for_concurrent_use() {
        let verifier = CredentialVerifier::new(config()).expect("failed to create verifier");
        let _clone = verifier.clone();
    }
}
