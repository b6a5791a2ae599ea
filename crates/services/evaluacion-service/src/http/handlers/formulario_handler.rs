//! Formulario handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use common::AppResult;
use domain::{is_valid_numero, FormularioInput, FormularioResponse, MAX_NUMERO_LENGTH};

use crate::http::extractors::ValidatedJson;
use crate::http::state::AppState;

/// Formulario create/update request with validation
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormularioRequest {
    /// Defaults to the current time when omitted
    pub fecha: Option<DateTime<Utc>>,
    #[validate(custom(function = "validate_numero"))]
    #[schema(example = "F-2024-001")]
    pub numero: String,
    #[serde(default)]
    #[schema(example = 5)]
    pub evaluacion: i32,
    /// Status to link, ignored when unknown
    #[schema(example = 1)]
    pub estado_formulario_id: Option<i64>,
}

fn validate_numero(numero: &str) -> Result<(), ValidationError> {
    if is_valid_numero(numero) {
        return Ok(());
    }

    let mut error = ValidationError::new("numero");
    error.message = Some(
        format!(
            "numero must not be blank and at most {} characters",
            MAX_NUMERO_LENGTH
        )
        .into(),
    );
    Err(error)
}

impl From<FormularioRequest> for FormularioInput {
    fn from(request: FormularioRequest) -> Self {
        FormularioInput {
            fecha: request.fecha,
            numero: request.numero,
            evaluacion: request.evaluacion,
            estado_formulario_id: request.estado_formulario_id,
        }
    }
}

/// Create formulario routes
pub fn formulario_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_formularios).post(create_formulario))
        .route(
            "/:id",
            get(get_formulario)
                .put(update_formulario)
                .delete(delete_formulario),
        )
        .route("/:id/detalle", get(enrich_formulario))
}

/// List all formularios
#[utoipa::path(
    get,
    path = "/api/evaluacion/formulario",
    tag = "Formularios",
    responses(
        (status = 200, description = "All formularios", body = Vec<FormularioResponse>)
    )
)]
pub async fn list_formularios(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<FormularioResponse>>> {
    Ok(Json(state.formularios.list_formularios().await?))
}

/// Get formulario by ID
#[utoipa::path(
    get,
    path = "/api/evaluacion/formulario/{id}",
    tag = "Formularios",
    params(
        ("id" = i64, Path, description = "Formulario ID")
    ),
    responses(
        (status = 200, description = "Formulario", body = FormularioResponse),
        (status = 404, description = "Formulario not found")
    )
)]
pub async fn get_formulario(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<FormularioResponse>> {
    Ok(Json(state.formularios.get_formulario(id).await?))
}

/// Create formulario
#[utoipa::path(
    post,
    path = "/api/evaluacion/formulario",
    tag = "Formularios",
    request_body = FormularioRequest,
    responses(
        (status = 201, description = "Formulario created", body = FormularioResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_formulario(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<FormularioRequest>,
) -> AppResult<(StatusCode, Json<FormularioResponse>)> {
    let formulario = state
        .formularios
        .create_formulario(payload.into())
        .await?;
    Ok((StatusCode::CREATED, Json(formulario)))
}

/// Update formulario
#[utoipa::path(
    put,
    path = "/api/evaluacion/formulario/{id}",
    tag = "Formularios",
    params(
        ("id" = i64, Path, description = "Formulario ID")
    ),
    request_body = FormularioRequest,
    responses(
        (status = 200, description = "Formulario updated", body = FormularioResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Formulario not found")
    )
)]
pub async fn update_formulario(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<FormularioRequest>,
) -> AppResult<Json<FormularioResponse>> {
    let formulario = state
        .formularios
        .update_formulario(id, payload.into())
        .await?;
    Ok(Json(formulario))
}

/// Delete formulario (idempotent)
#[utoipa::path(
    delete,
    path = "/api/evaluacion/formulario/{id}",
    tag = "Formularios",
    params(
        ("id" = i64, Path, description = "Formulario ID")
    ),
    responses(
        (status = 204, description = "Formulario deleted or already absent")
    )
)]
pub async fn delete_formulario(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.formularios.delete_formulario(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Get formulario with proveedor, categoria and perito from the empresa service
#[utoipa::path(
    get,
    path = "/api/evaluacion/formulario/{id}/detalle",
    tag = "Formularios",
    params(
        ("id" = i64, Path, description = "Formulario ID")
    ),
    responses(
        (status = 200, description = "Enriched formulario", body = FormularioResponse),
        (status = 400, description = "Formulario lacks a remote reference"),
        (status = 404, description = "Formulario not found"),
        (status = 502, description = "Empresa service returned an error"),
        (status = 503, description = "Empresa service unreachable")
    )
)]
pub async fn enrich_formulario(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<FormularioResponse>> {
    Ok(Json(state.formularios.enrich_formulario(id).await?))
}
