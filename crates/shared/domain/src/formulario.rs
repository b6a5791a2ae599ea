//! Formulario de evaluación domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{ENTITY_CATEGORIA, ENTITY_PERITO, ENTITY_PROVEEDOR};
use crate::error::{DomainError, DomainResult};
use crate::remote::{Categoria, Perito, Proveedor};

/// Status of a formulario. Its lifecycle is owned elsewhere; read-only here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstadoFormulario {
    pub id: i64,
    pub nombre: String,
}

/// Evaluation form entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormularioEvaluacion {
    /// Surrogate key (None until persisted)
    pub id: Option<i64>,
    pub fecha: DateTime<Utc>,
    pub numero: String,
    pub evaluacion: i32,
    pub estado_formulario: Option<EstadoFormulario>,
    pub proveedor_id: Option<i64>,
    pub categoria_id: Option<i64>,
    pub perito_id: Option<i64>,
    /// Transient, only populated by enrichment
    pub proveedor: Option<Proveedor>,
    /// Transient, only populated by enrichment
    pub categoria: Option<Categoria>,
    /// Transient, only populated by enrichment
    pub perito: Option<Perito>,
}

/// Identifiers of the remote entities a formulario points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteRefs {
    pub proveedor_id: i64,
    pub categoria_id: i64,
    pub perito_id: i64,
}

impl FormularioEvaluacion {
    /// Create a new, not yet persisted formulario
    pub fn new(fecha: DateTime<Utc>, numero: String, evaluacion: i32) -> Self {
        Self {
            id: None,
            fecha,
            numero,
            evaluacion,
            estado_formulario: None,
            proveedor_id: None,
            categoria_id: None,
            perito_id: None,
            proveedor: None,
            categoria: None,
            perito: None,
        }
    }

    /// Check if any remote entity has been attached
    pub fn is_enriched(&self) -> bool {
        self.proveedor.is_some() || self.categoria.is_some() || self.perito.is_some()
    }

    /// Collect the remote identifiers required for enrichment.
    pub fn remote_refs(&self) -> DomainResult<RemoteRefs> {
        Ok(RemoteRefs {
            proveedor_id: self
                .proveedor_id
                .ok_or(DomainError::MissingReference(ENTITY_PROVEEDOR))?,
            categoria_id: self
                .categoria_id
                .ok_or(DomainError::MissingReference(ENTITY_CATEGORIA))?,
            perito_id: self
                .perito_id
                .ok_or(DomainError::MissingReference(ENTITY_PERITO))?,
        })
    }

    /// Attach the remote entities fetched for this formulario
    pub fn attach_remote(&mut self, proveedor: Proveedor, categoria: Categoria, perito: Perito) {
        self.proveedor = Some(proveedor);
        self.categoria = Some(categoria);
        self.perito = Some(perito);
    }
}

/// Create/update input, already validated by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormularioInput {
    /// Defaults to the current time when absent
    pub fecha: Option<DateTime<Utc>>,
    pub numero: String,
    pub evaluacion: i32,
    /// Status to link, resolved by id
    pub estado_formulario_id: Option<i64>,
}

/// Nested status shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EstadoFormularioResponse {
    pub id: i64,
    pub nombre: String,
}

/// Nested provider shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ProveedorResponse {
    pub id: i64,
    pub nombre: Option<String>,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
}

/// Nested appraiser shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PeritoResponse {
    pub id: i64,
    pub nombre: Option<String>,
    pub direccion: Option<String>,
    pub telefono: Option<String>,
}

/// Nested category shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CategoriaResponse {
    pub id: i64,
    pub descripcion: Option<String>,
}

/// Formulario output (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FormularioResponse {
    pub id: Option<i64>,
    pub fecha: DateTime<Utc>,
    pub numero: String,
    pub evaluacion: i32,
    #[serde(
        rename = "estadoFormularioDTO",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub estado_formulario: Option<EstadoFormularioResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proveedor: Option<ProveedorResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perito: Option<PeritoResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categoria: Option<CategoriaResponse>,
}
