//! The username/password pair under verification.

use std::fmt;

/// Credentials supplied for a single verification call.
///
/// The pair is transient: it is borrowed for the duration of the call and
/// never stored by the verifier. The password is excluded from the `Debug`
/// representation so it cannot leak through logging.
#[derive(Clone)]
pub struct Credentials {
    /// Identifier the user typed in (username or member number).
    pub username: String,

    /// Password. Never logged, never part of any outcome or error.
    pub password: String,
}

impl Credentials {
    /// Create a credential pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_password() {
        let creds = Credentials::new("jdoe123", "hunter2");
        let rendered = format!("{:?}", creds);

        assert!(rendered.contains("jdoe123"));
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}
