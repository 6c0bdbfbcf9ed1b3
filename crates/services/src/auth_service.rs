use std::sync::Arc;

use tracing::{info, warn};

use ispace_core::model::{AuthToken, LoginStatus, normalize_username};
use storage::keys;
use storage::repository::KeyValueStore;

use crate::error::AuthServiceError;

/// Where the learner lands after logging out.
pub const LOGOUT_REDIRECT: &str = "/";

/// Reads and writes the stored login token and username.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn KeyValueStore>,
}

impl AuthService {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Logged in iff a token is stored. Store failures read as logged out.
    pub async fn status(&self) -> LoginStatus {
        match self.store.get(keys::AUTH_TOKEN).await {
            Ok(Some(_)) => {
                let username = self.store.get(keys::USERNAME).await.ok().flatten();
                LoginStatus::LoggedIn { username }
            }
            Ok(None) => LoginStatus::LoggedOut,
            Err(err) => {
                warn!(error = %err, "auth store unavailable, treating as logged out");
                LoginStatus::LoggedOut
            }
        }
    }

    /// Store `username` with a freshly generated token.
    ///
    /// # Errors
    ///
    /// Returns `AuthServiceError` if the username is blank or persistence fails.
    pub async fn login(&self, username: &str) -> Result<AuthToken, AuthServiceError> {
        let username = normalize_username(username)?;
        let token = AuthToken::generate();
        self.store.set(keys::USERNAME, &username).await?;
        self.store.set(keys::AUTH_TOKEN, token.as_str()).await?;
        info!(%username, "logged in");
        Ok(token)
    }

    /// Clear the stored username and token; returns the redirect target.
    ///
    /// # Errors
    ///
    /// Returns `AuthServiceError::Storage` if either key cannot be removed.
    pub async fn logout(&self) -> Result<&'static str, AuthServiceError> {
        self.store.remove(keys::USERNAME).await?;
        self.store.remove(keys::AUTH_TOKEN).await?;
        info!("logged out");
        Ok(LOGOUT_REDIRECT)
    }
}
