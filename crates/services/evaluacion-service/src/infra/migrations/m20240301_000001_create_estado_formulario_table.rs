//! Migration: Create estado_formulario table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EstadoFormulario::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EstadoFormulario::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(EstadoFormulario::Nombre).string_len(64).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EstadoFormulario::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum EstadoFormulario {
    Table,
    Id,
    Nombre,
}
