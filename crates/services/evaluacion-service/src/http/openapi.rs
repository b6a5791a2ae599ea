//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::http::handlers::formulario_handler::FormularioRequest;
use domain::{
    CategoriaResponse, EstadoFormularioResponse, FormularioResponse, PeritoResponse,
    ProveedorResponse,
};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Evaluacion Service",
        description = "Formularios de evaluación with proveedor, categoria and perito enrichment"
    ),
    paths(
        crate::http::handlers::formulario_handler::list_formularios,
        crate::http::handlers::formulario_handler::get_formulario,
        crate::http::handlers::formulario_handler::create_formulario,
        crate::http::handlers::formulario_handler::update_formulario,
        crate::http::handlers::formulario_handler::delete_formulario,
        crate::http::handlers::formulario_handler::enrich_formulario,
    ),
    components(
        schemas(
            FormularioRequest,
            FormularioResponse,
            EstadoFormularioResponse,
            ProveedorResponse,
            PeritoResponse,
            CategoriaResponse,
        )
    ),
    tags(
        (name = "Formularios", description = "Formulario de evaluación management"),
    )
)]
pub struct ApiDoc;
