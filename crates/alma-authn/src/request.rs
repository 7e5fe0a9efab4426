//! Request construction for the two backend calls.
//!
//! Pure functions of credentials + config; no shared state. The username is
//! percent-encoded as a path segment and the password and API key as query
//! pairs, so reserved characters in user input cannot alter the request
//! shape.

use url::Url;

use crate::config::AlmaConfig;
use crate::credentials::Credentials;
use crate::error::ConfigError;

/// Build the authentication URL:
/// `{api_root}/users/{username}?format=json&op=auth&password=..&apikey=..`.
///
/// Issued as a POST with no body. The password travels in the query string —
/// that is the Alma API's contract, acceptable only over TLS with no request
/// logging at intermediate proxies. The resulting URL must therefore never
/// be logged; use [`redacted`] for diagnostics.
pub fn auth_url(creds: &Credentials, config: &AlmaConfig) -> Result<Url, ConfigError> {
    let mut url = user_path(creds, config)?;
    url.query_pairs_mut()
        .append_pair("format", "json")
        .append_pair("op", "auth")
        .append_pair("password", &creds.password)
        .append_pair("apikey", &config.api_key);
    Ok(url)
}

/// Build the user-record fetch URL:
/// `{api_root}/users/{username}?format=json&apikey=..`.
///
/// Issued as a GET. Carries no password.
pub fn fetch_url(creds: &Credentials, config: &AlmaConfig) -> Result<Url, ConfigError> {
    let mut url = user_path(creds, config)?;
    url.query_pairs_mut()
        .append_pair("format", "json")
        .append_pair("apikey", &config.api_key);
    Ok(url)
}

/// Render a URL with its query string removed, safe for logging.
pub fn redacted(url: &Url) -> String {
    let mut safe = url.clone();
    safe.set_query(None);
    safe.to_string()
}

fn user_path(creds: &Credentials, config: &AlmaConfig) -> Result<Url, ConfigError> {
    let root = config.validate()?;
    let mut url = root.clone();
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| ConfigError::InvalidApiRoot {
                reason: "URL cannot be a base".to_string(),
            })?;
        segments.pop_if_empty().push("users").push(&creds.username);
    }
    Ok(url)
}
