use std::sync::Arc;

use storage::repository::Storage;

use crate::auth_service::AuthService;
use crate::error::AppServicesError;
use crate::progress_gate::ProgressGate;

/// Assembles app-facing services over one shared store.
#[derive(Clone)]
pub struct AppServices {
    progress_gate: Arc<ProgressGate>,
    auth: Arc<AuthService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage))
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_storage(&Storage::in_memory())
    }

    #[must_use]
    pub fn from_storage(storage: &Storage) -> Self {
        Self {
            progress_gate: Arc::new(ProgressGate::new(Arc::clone(&storage.kv))),
            auth: Arc::new(AuthService::new(Arc::clone(&storage.kv))),
        }
    }

    #[must_use]
    pub fn progress_gate(&self) -> Arc<ProgressGate> {
        Arc::clone(&self.progress_gate)
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }
}
