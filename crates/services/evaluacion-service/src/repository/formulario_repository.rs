//! Formulario repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Unchanged, DatabaseConnection, DbErr,
    EntityTrait, QueryOrder, Set,
};

use super::entities::formulario_evaluacion::{self, ActiveModel};
use super::entities::{EstadoFormularioEntity, FormularioEntity};
use common::{AppError, AppResult};
use domain::{EstadoFormulario, FormularioEvaluacion};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Formulario repository trait for dependency injection.
///
/// Loaded formularios carry their status; remote entities are never loaded.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait FormularioRepository: Send + Sync {
    /// List all formularios in primary key order
    async fn find_all(&self) -> AppResult<Vec<FormularioEvaluacion>>;

    /// Find formulario by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<FormularioEvaluacion>>;

    /// Insert when the formulario has no ID yet, update otherwise
    async fn save(&self, formulario: FormularioEvaluacion) -> AppResult<FormularioEvaluacion>;

    /// Delete formulario by ID, returning whether a row was removed
    async fn delete_by_id(&self, id: i64) -> AppResult<bool>;
}

/// Concrete implementation of FormularioRepository
pub struct FormularioStore {
    db: DatabaseConnection,
}

impl FormularioStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FormularioRepository for FormularioStore {
    async fn find_all(&self) -> AppResult<Vec<FormularioEvaluacion>> {
        let rows = FormularioEntity::find()
            .order_by_asc(formulario_evaluacion::Column::Id)
            .find_also_related(EstadoFormularioEntity)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(rows
            .into_iter()
            .map(|(model, estado)| model.into_formulario(estado.map(EstadoFormulario::from)))
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<FormularioEvaluacion>> {
        let row = FormularioEntity::find_by_id(id)
            .find_also_related(EstadoFormularioEntity)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(row.map(|(model, estado)| model.into_formulario(estado.map(EstadoFormulario::from))))
    }

    async fn save(&self, formulario: FormularioEvaluacion) -> AppResult<FormularioEvaluacion> {
        let estado = formulario.estado_formulario;
        let mut active = ActiveModel {
            id: NotSet,
            fecha: Set(formulario.fecha),
            numero: Set(formulario.numero),
            evaluacion: Set(formulario.evaluacion),
            estado_formulario_id: Set(estado.as_ref().map(|e| e.id)),
            proveedor_id: Set(formulario.proveedor_id),
            categoria_id: Set(formulario.categoria_id),
            perito_id: Set(formulario.perito_id),
        };

        let model = match formulario.id {
            Some(id) => {
                active.id = Unchanged(id);
                active.update(&self.db).await.map_err(|e| match e {
                    DbErr::RecordNotUpdated => AppError::NotFound,
                    other => AppError::from(other),
                })?
            }
            None => active.insert(&self.db).await.map_err(AppError::from)?,
        };

        Ok(model.into_formulario(estado))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let result = FormularioEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }
}
