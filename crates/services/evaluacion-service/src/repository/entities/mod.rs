//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod estado_formulario;
pub mod formulario_evaluacion;

pub use estado_formulario::Entity as EstadoFormularioEntity;
pub use formulario_evaluacion::Entity as FormularioEntity;
