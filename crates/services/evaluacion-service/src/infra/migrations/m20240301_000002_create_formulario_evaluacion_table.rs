//! Migration: Create formulario_evaluacion table.

use sea_orm_migration::prelude::*;

use super::m20240301_000001_create_estado_formulario_table::EstadoFormulario;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FormularioEvaluacion::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FormularioEvaluacion::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FormularioEvaluacion::Fecha)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FormularioEvaluacion::Numero)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FormularioEvaluacion::Evaluacion)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(FormularioEvaluacion::EstadoFormularioId).big_integer().null())
                    // Remote references: no foreign keys, the rows live in the empresa service
                    .col(ColumnDef::new(FormularioEvaluacion::ProveedorId).big_integer().null())
                    .col(ColumnDef::new(FormularioEvaluacion::CategoriaId).big_integer().null())
                    .col(ColumnDef::new(FormularioEvaluacion::PeritoId).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_formulario_evaluacion_estado_formulario")
                            .from(FormularioEvaluacion::Table, FormularioEvaluacion::EstadoFormularioId)
                            .to(EstadoFormulario::Table, EstadoFormulario::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FormularioEvaluacion::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum FormularioEvaluacion {
    Table,
    Id,
    Fecha,
    Numero,
    Evaluacion,
    EstadoFormularioId,
    ProveedorId,
    CategoriaId,
    PeritoId,
}
