use std::sync::Arc;

use services::{AuthService, ProgressGate};

pub trait UiApp: Send + Sync {
    fn progress_gate(&self) -> Arc<ProgressGate>;
    fn auth(&self) -> Arc<AuthService>;
}

#[derive(Clone)]
pub struct AppContext {
    progress_gate: Arc<ProgressGate>,
    auth: Arc<AuthService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            progress_gate: app.progress_gate(),
            auth: app.auth(),
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

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
