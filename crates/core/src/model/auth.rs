use std::fmt;

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AuthError {
    #[error("username cannot be empty")]
    EmptyUsername,
}

/// Opaque token proving a login happened on this profile.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Generates a fresh random token.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(..)")
    }
}

/// Normalize a username typed by the learner.
///
/// # Errors
///
/// Returns `AuthError::EmptyUsername` if nothing remains after trimming.
pub fn normalize_username(raw: &str) -> Result<String, AuthError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AuthError::EmptyUsername);
    }
    Ok(trimmed.to_owned())
}

/// Whether the current profile holds an auth token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginStatus {
    LoggedIn { username: Option<String> },
    LoggedOut,
}

impl LoginStatus {
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        matches!(self, LoginStatus::LoggedIn { .. })
    }
}
