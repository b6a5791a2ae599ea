//! Formulario de evaluación database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{EstadoFormulario, FormularioEvaluacion};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "formulario_evaluacion")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub fecha: DateTimeUtc,
    pub numero: String,
    pub evaluacion: i32,
    pub estado_formulario_id: Option<i64>,
    /// Remote references, no local foreign key
    pub proveedor_id: Option<i64>,
    pub categoria_id: Option<i64>,
    pub perito_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::estado_formulario::Entity",
        from = "Column::EstadoFormularioId",
        to = "super::estado_formulario::Column::Id",
        on_delete = "SetNull"
    )]
    EstadoFormulario,
}

impl Related<super::estado_formulario::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EstadoFormulario.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert to the domain entity, attaching the already-loaded status.
    ///
    /// Remote entities are never loaded here; they stay empty until enrichment.
    pub fn into_formulario(self, estado: Option<EstadoFormulario>) -> FormularioEvaluacion {
        FormularioEvaluacion {
            id: Some(self.id),
            fecha: self.fecha,
            numero: self.numero,
            evaluacion: self.evaluacion,
            estado_formulario: estado,
            proveedor_id: self.proveedor_id,
            categoria_id: self.categoria_id,
            perito_id: self.perito_id,
            proveedor: None,
            categoria: None,
            perito: None,
        }
    }
}
