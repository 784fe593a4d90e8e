use std::sync::Arc;

use services::PassportService;

pub trait UiApp: Send + Sync {
    /// Resolved identity, or `None` when nothing could be resolved.
    fn email(&self) -> Option<String>;

    fn passport(&self) -> Arc<PassportService>;
}

#[derive(Clone)]
pub struct AppContext {
    email: Option<String>,
    passport: Arc<PassportService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            email: app.email().filter(|email| !email.trim().is_empty()),
            passport: app.passport(),
        }
    }

    #[must_use]
    pub fn email(&self) -> Option<String> {
        self.email.clone()
    }

    #[must_use]
    pub fn passport(&self) -> Arc<PassportService> {
        Arc::clone(&self.passport)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
