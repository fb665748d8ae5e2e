//! Shared application state for axum handlers.

use std::sync::Arc;

use scriptdeck_app::ports::ScriptRepository;
use scriptdeck_app::services::script_service::ScriptService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the repository itself does not need to be
/// `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Script catalog and run use-cases.
    pub script_service: Arc<ScriptService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            script_service: Arc::clone(&self.script_service),
        }
    }
}

impl<R> AppState<R>
where
    R: ScriptRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(script_service: ScriptService<R>) -> Self {
        Self {
            script_service: Arc::new(script_service),
        }
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    ///
    /// Use this when the service needs to be shared with other parts of
    /// the process before constructing the HTTP state.
    pub fn from_arc(script_service: Arc<ScriptService<R>>) -> Self {
        Self { script_service }
    }
}
