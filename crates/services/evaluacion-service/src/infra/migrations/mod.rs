//! Database migrations.
//!
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}

use sea_orm_migration::prelude::*;

mod m20240301_000001_create_estado_formulario_table;
mod m20240301_000002_create_formulario_evaluacion_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_estado_formulario_table::Migration),
            Box::new(m20240301_000002_create_formulario_evaluacion_table::Migration),
        ]
    }
}
