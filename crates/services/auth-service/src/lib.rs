//! Auth Service Library
//!
//! Authenticates end users against stored credentials and issues/validates
//! opaque session tokens over gRPC. Three public operations: Login, SignUp,
//! ValidateToken.

pub mod config;
pub mod grpc;
pub mod infra;
pub mod repository;
pub mod service;

use std::net::SocketAddr;
use std::sync::Arc;

use tonic::transport::Server;
use tracing::info;

use crate::config::AuthServiceConfig;
use crate::grpc::AuthGrpcService;
use crate::infra::Database;
use crate::repository::{AccountStore, SessionStore};
use crate::service::Authenticator;

/// Run the gRPC server with configuration taken from the environment.
///
/// Explicit host/port arguments override the environment-supplied bind
/// address.
pub async fn run(host: Option<String>, port: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let config = AuthServiceConfig::from_env();
    let (host, port) = config.bind_addr(host, port);
    run_server_with_config(&host, port, config).await
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = AuthServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database.url).await?;

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

/// Run the gRPC server with the given configuration.
async fn run_server_with_config(
    host: &str,
    port: u16,
    config: AuthServiceConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize database (runs pending migrations) and prove it is
    // reachable before accepting traffic
    let db = Database::connect(&config.database.url).await?;
    db.ping().await?;
    let db_conn = db.get_connection();

    // Repositories are constructed once and injected; no global handle
    let accounts = Arc::new(AccountStore::new(db_conn.clone()));
    let sessions = Arc::new(SessionStore::new(db_conn));

    // Core service and its gRPC wrapper
    let auth_service = Arc::new(Authenticator::new(accounts, sessions));
    let grpc_service = AuthGrpcService::new(auth_service);

    // Build address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Auth service listening on {}", addr);

    // Run server
    Server::builder()
        .add_service(proto::AuthServer::new(grpc_service))
        .serve(addr)
        .await?;

    Ok(())
}
