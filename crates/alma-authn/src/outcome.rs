//! The classified result of a verification call.

/// Result of one credential verification.
///
/// This is the whole public contract: the verifier never surfaces transport
/// or parse errors across its boundary, it classifies them. Callers decide
/// retry policy; no variant is retried internally.
///
/// `InvalidCredentials` and `AccountInactive` are distinct here, but a host
/// presenting login failures to end users should keep them
/// indistinguishable, or the difference becomes an account-probing oracle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// Password accepted and account active.
    Success {
        /// Canonical account identifier, which becomes the principal. Not
        /// necessarily the identifier the user typed in.
        primary_id: String,

        /// `"{first_name} {last_name}"`.
        display_name: String,

        /// `"{group code} / {group description}"`.
        user_group_label: String,
    },

    /// The backend rejected the username/password pair.
    InvalidCredentials,

    /// Password accepted, but the account is not active.
    AccountInactive,

    /// The backend could not be reached, timed out, answered with a server
    /// error, or returned an unusable user record. Never contains password
    /// material.
    BackendError {
        /// Classified failure description.
        detail: String,
    },

    /// The caller cancelled the verification before it completed.
    Cancelled,
}

impl VerificationOutcome {
    /// Whether the login may proceed.
    pub fn is_verified(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_success_is_verified() {
        let success = VerificationOutcome::Success {
            primary_id: "P1".to_string(),
            display_name: "Jane Doe".to_string(),
            user_group_label: "STAFF / Staff Member".to_string(),
        };
        assert!(success.is_verified());

        assert!(!VerificationOutcome::InvalidCredentials.is_verified());
        assert!(!VerificationOutcome::AccountInactive.is_verified());
        assert!(!VerificationOutcome::Cancelled.is_verified());
        assert!(!VerificationOutcome::BackendError {
            detail: "request timed out".to_string()
        }
        .is_verified());
    }
}
