//! Application state for dependency injection.

use std::sync::Arc;

use crate::infra::Database;
use crate::service::FormularioService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub formularios: Arc<dyn FormularioService>,
    pub database: Database,
}

impl AppState {
    /// Create new app state.
    pub fn new(formularios: Arc<dyn FormularioService>, database: Database) -> Self {
        Self {
            formularios,
            database,
        }
    }
}
