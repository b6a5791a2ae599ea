//! Evaluacion Service Library
//!
//! This crate provides formulario de evaluación management over HTTP,
//! enriching formularios with proveedor, categoria and perito data from the
//! empresa service.

pub mod client;
pub mod config;
pub mod http;
pub mod infra;
pub mod repository;
pub mod service;

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing::info;

use crate::client::HttpEmpresaClient;
use crate::config::EvaluacionServiceConfig;
use crate::http::{create_router, AppState};
use crate::infra::Database;
use crate::repository::{EstadoFormularioStore, FormularioStore};
use crate::service::FormularioManager;

/// Run the HTTP server, overriding the configured bind address.
pub async fn run(host: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = EvaluacionServiceConfig::from_env();
    config.server.host = host.to_string();
    config.server.port = port;
    run_server_with_config(config).await
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = EvaluacionServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Wire repositories, the empresa client and the service into app state.
pub fn build_state(
    config: &EvaluacionServiceConfig,
    db: Database,
) -> Result<AppState, Box<dyn std::error::Error>> {
    let connection = db.get_connection();

    let formularios = Arc::new(FormularioStore::new(connection.clone()));
    let estados = Arc::new(EstadoFormularioStore::new(connection));
    let empresa = Arc::new(HttpEmpresaClient::new(config.empresa.clone())?);
    let service = Arc::new(FormularioManager::new(formularios, estados, empresa));

    Ok(AppState::new(service, db))
}

/// Run the HTTP server with the given configuration.
async fn run_server_with_config(
    config: EvaluacionServiceConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting with {:?}", config);

    // Initialize database
    let db = Database::connect(&config.database).await?;
    let state = build_state(&config, db)?;

    let app = create_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server.bind_address().parse()?;
    info!("Evaluacion service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
