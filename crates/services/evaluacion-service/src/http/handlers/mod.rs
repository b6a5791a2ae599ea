//! HTTP request handlers.

pub mod formulario_handler;
pub mod health_handler;

pub use formulario_handler::formulario_routes;
pub use health_handler::health_routes;
