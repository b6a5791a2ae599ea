//! Route configuration.

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::http::handlers::{formulario_routes, health_routes};
use crate::http::openapi::ApiDoc;
use crate::http::state::AppState;

/// Base path of the formulario resource
pub const FORMULARIO_BASE_PATH: &str = "/api/evaluacion/formulario";

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest(FORMULARIO_BASE_PATH, formulario_routes())
        .with_state(state)
}
