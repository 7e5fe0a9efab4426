//! Mapping of the Alma user JSON into a validated record.
//!
//! The wire shape (every field optional, then checked) exists because the
//! backend is external: a missing `status` or `user_group` must surface as a
//! classified [`ParseError`], not a panic deep in a field access chain.

use serde::Deserialize;

use crate::error::ParseError;

/// Account state reported by the backend. Only `Active` users may complete
/// verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    /// Literal `"ACTIVE"` (case-sensitive).
    Active,
    /// Literal `"INACTIVE"`.
    Inactive,
    /// Any other non-empty value (e.g. `"EXPIRED"`, `"DELETED"`).
    Other,
}

impl UserStatus {
    fn from_value(value: &str) -> Self {
        match value {
            "ACTIVE" => Self::Active,
            "INACTIVE" => Self::Inactive,
            _ => Self::Other,
        }
    }
}

/// A user record parsed and validated from the fetch response.
#[derive(Debug, Clone)]
pub struct RemoteUser {
    /// Canonical account identifier. May differ from the identifier the
    /// user typed in (member numbers also authenticate).
    pub primary_id: String,

    /// `"{first_name} {last_name}"`.
    pub display_name: String,

    /// User group code (e.g. `"STAFF"`).
    pub user_group_code: String,

    /// Human-readable user group description.
    pub user_group_desc: String,

    /// Account state.
    pub status: UserStatus,
}

impl RemoteUser {
    /// Combined group label, `"{code} / {desc}"`.
    pub fn user_group_label(&self) -> String {
        format!("{} / {}", self.user_group_code, self.user_group_desc)
    }
}

/// Wire shape of `GET /users/{id}?format=json`.
#[derive(Debug, Deserialize)]
struct UserWire {
    #[serde(default)]
    primary_id: Option<String>,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default)]
    user_group: Option<CodeDescWire>,
    #[serde(default)]
    status: Option<CodeDescWire>,
}

/// Alma's `{"value": .., "desc": ..}` pair, used for group and status.
#[derive(Debug, Deserialize)]
struct CodeDescWire {
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    desc: Option<String>,
}

/// Parse the fetch response body into a [`RemoteUser`].
///
/// `primary_id`, `first_name`, `last_name`, `user_group.value`,
/// `user_group.desc`, and `status.value` are required; an absent or empty
/// required field is a [`ParseError::MissingField`].
pub fn parse_user(body: &str) -> Result<RemoteUser, ParseError> {
    let wire: UserWire = serde_json::from_str(body).map_err(|e| ParseError::Json {
        message: e.to_string(),
    })?;

    let primary_id = required(wire.primary_id, "primary_id")?;
    let first_name = required(wire.first_name, "first_name")?;
    let last_name = required(wire.last_name, "last_name")?;

    let user_group = wire.user_group.ok_or(ParseError::MissingField {
        field: "user_group",
    })?;
    let user_group_code = required(user_group.value, "user_group.value")?;
    let user_group_desc = required(user_group.desc, "user_group.desc")?;

    let status = wire.status.ok_or(ParseError::MissingField { field: "status" })?;
    let status_value = required(status.value, "status.value")?;

    Ok(RemoteUser {
        primary_id,
        display_name: format!("{} {}", first_name, last_name),
        user_group_code,
        user_group_desc,
        status: UserStatus::from_value(&status_value),
    })
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ParseError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ParseError::MissingField { field }),
    }
}
