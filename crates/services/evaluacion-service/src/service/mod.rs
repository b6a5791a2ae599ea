//! Application services layer - formulario use cases.

mod formulario_service;

pub use formulario_service::{FormularioManager, FormularioService};
