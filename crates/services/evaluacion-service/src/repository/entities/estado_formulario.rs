//! Formulario status database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::EstadoFormulario;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "estado_formulario")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nombre: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::formulario_evaluacion::Entity")]
    FormularioEvaluacion,
}

impl Related<super::formulario_evaluacion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FormularioEvaluacion.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for EstadoFormulario {
    fn from(model: Model) -> Self {
        EstadoFormulario {
            id: model.id,
            nombre: model.nombre,
        }
    }
}
