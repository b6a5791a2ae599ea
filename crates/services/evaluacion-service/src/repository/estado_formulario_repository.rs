//! Formulario status repository (read-only).

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};

use super::entities::EstadoFormularioEntity;
use common::{AppError, AppResult};
use domain::EstadoFormulario;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Status lookups. Statuses are managed outside this service.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EstadoFormularioRepository: Send + Sync {
    /// Find status by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<EstadoFormulario>>;
}

/// Concrete implementation of EstadoFormularioRepository
pub struct EstadoFormularioStore {
    db: DatabaseConnection,
}

impl EstadoFormularioStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EstadoFormularioRepository for EstadoFormularioStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<EstadoFormulario>> {
        let result = EstadoFormularioEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(EstadoFormulario::from))
    }
}
