//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Types here are shared by the evaluacion service and its HTTP layer.

pub mod constants;
pub mod error;
pub mod formulario;
pub mod mapper;
pub mod remote;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use formulario::{
    CategoriaResponse, EstadoFormulario, EstadoFormularioResponse, FormularioEvaluacion,
    FormularioInput, FormularioResponse, PeritoResponse, ProveedorResponse, RemoteRefs,
};
pub use remote::{Categoria, Perito, Proveedor};
