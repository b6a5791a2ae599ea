//! Formulario service - CRUD and enrichment of evaluation forms.
//!
//! SOLID (SRP): Handles formulario use cases only.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use common::{AppError, AppResult, OptionExt};
use domain::{mapper, EstadoFormulario, FormularioInput, FormularioResponse};

use crate::client::EmpresaClient;
use crate::repository::{EstadoFormularioRepository, FormularioRepository};

/// Formulario service trait for dependency injection.
#[async_trait]
pub trait FormularioService: Send + Sync {
    /// List all formularios (store order)
    async fn list_formularios(&self) -> AppResult<Vec<FormularioResponse>>;

    /// Get formulario by ID
    async fn get_formulario(&self, id: i64) -> AppResult<FormularioResponse>;

    /// Create a new formulario
    async fn create_formulario(&self, input: FormularioInput) -> AppResult<FormularioResponse>;

    /// Replace the writable fields of an existing formulario
    async fn update_formulario(
        &self,
        id: i64,
        input: FormularioInput,
    ) -> AppResult<FormularioResponse>;

    /// Delete formulario; a missing ID is a no-op reported as `false`
    async fn delete_formulario(&self, id: i64) -> AppResult<bool>;

    /// Get formulario with its proveedor, categoria and perito fetched from
    /// the empresa service
    async fn enrich_formulario(&self, id: i64) -> AppResult<FormularioResponse>;
}

/// Concrete implementation of FormularioService using repositories.
pub struct FormularioManager {
    formularios: Arc<dyn FormularioRepository>,
    estados: Arc<dyn EstadoFormularioRepository>,
    empresa: Arc<dyn EmpresaClient>,
}

impl FormularioManager {
    /// Create new formulario service instance
    pub fn new(
        formularios: Arc<dyn FormularioRepository>,
        estados: Arc<dyn EstadoFormularioRepository>,
        empresa: Arc<dyn EmpresaClient>,
    ) -> Self {
        Self {
            formularios,
            estados,
            empresa,
        }
    }

    /// Look up the status referenced by the input. Unknown IDs resolve to None.
    async fn resolve_estado(&self, id: Option<i64>) -> AppResult<Option<EstadoFormulario>> {
        let Some(id) = id else {
            return Ok(None);
        };

        let estado = self.estados.find_by_id(id).await?;
        if estado.is_none() {
            warn!("Estado formulario {} not found, status not linked", id);
        }
        Ok(estado)
    }
}

#[async_trait]
impl FormularioService for FormularioManager {
    async fn list_formularios(&self) -> AppResult<Vec<FormularioResponse>> {
        self.formularios
            .find_all()
            .await?
            .iter()
            .map(|f| mapper::to_response(f).map_err(AppError::from))
            .collect()
    }

    async fn get_formulario(&self, id: i64) -> AppResult<FormularioResponse> {
        let formulario = self.formularios.find_by_id(id).await?.ok_or_not_found()?;
        Ok(mapper::to_response(&formulario)?)
    }

    async fn create_formulario(&self, input: FormularioInput) -> AppResult<FormularioResponse> {
        let estado = self.resolve_estado(input.estado_formulario_id).await?;
        let formulario = mapper::to_entity(input, estado);

        let saved = self.formularios.save(formulario).await?;
        info!(id = ?saved.id, numero = %saved.numero, "Formulario created");

        Ok(mapper::to_response(&saved)?)
    }

    async fn update_formulario(
        &self,
        id: i64,
        input: FormularioInput,
    ) -> AppResult<FormularioResponse> {
        let mut formulario = self.formularios.find_by_id(id).await?.ok_or_not_found()?;

        let estado = self.resolve_estado(input.estado_formulario_id).await?;
        mapper::apply_update(&mut formulario, input, estado);

        let saved = self.formularios.save(formulario).await?;
        info!(id, "Formulario updated");

        Ok(mapper::to_response(&saved)?)
    }

    async fn delete_formulario(&self, id: i64) -> AppResult<bool> {
        let deleted = self.formularios.delete_by_id(id).await?;
        if deleted {
            info!(id, "Formulario deleted");
        }
        Ok(deleted)
    }

    async fn enrich_formulario(&self, id: i64) -> AppResult<FormularioResponse> {
        let mut formulario = self.formularios.find_by_id(id).await?.ok_or_not_found()?;
        let refs = formulario.remote_refs()?;

        // Independent lookups; the first failure aborts the whole call.
        let (proveedor, categoria, perito) = tokio::try_join!(
            self.empresa.find_proveedor(refs.proveedor_id),
            self.empresa.find_categoria(refs.categoria_id),
            self.empresa.find_perito(refs.perito_id),
        )?;

        formulario.attach_remote(proveedor, categoria, perito);
        Ok(mapper::to_response(&formulario)?)
    }
}
