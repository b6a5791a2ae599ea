//! Repository layer for data access.

pub mod entities;
mod estado_formulario_repository;
mod formulario_repository;

pub use estado_formulario_repository::{EstadoFormularioRepository, EstadoFormularioStore};
pub use formulario_repository::{FormularioRepository, FormularioStore};

#[cfg(any(test, feature = "test-utils"))]
pub use estado_formulario_repository::MockEstadoFormularioRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use formulario_repository::MockFormularioRepository;
