//! Shared application state for axum handlers.

use std::sync::Arc;

use bricklog_app::ports::LegoSetRepository;
use bricklog_app::services::lego_set_service::LegoSetService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not
/// need to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// LEGO set CRUD service.
    pub lego_set_service: Arc<LegoSetService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            lego_set_service: Arc::clone(&self.lego_set_service),
        }
    }
}

impl<R> AppState<R>
where
    R: LegoSetRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(lego_set_service: LegoSetService<R>) -> Self {
        Self {
            lego_set_service: Arc::new(lego_set_service),
        }
    }
}
