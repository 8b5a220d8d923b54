//! Merch Visits server entry point.
//!
//! Loads configuration, initialises tracing, opens the PostgreSQL pool,
//! seeds the bootstrap account when configured and serves the API until
//! SIGINT/SIGTERM.
//!
//! Migrations are NOT run here; apply `migrations/` with an external runner
//! before starting the server.

use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use merch_visits::adapters::http::{build_app, ApiSettings};
use merch_visits::adapters::postgres::{self, PostgresStore};
use merch_visits::application::{BootstrapUserCommand, BootstrapUserHandler, BootstrapUserResult};
use merch_visits::config::{AppConfig, ConfigError, ValidationError};
use merch_visits::domain::auth::CredentialStore;
use merch_visits::domain::foundation::{DomainError, IdGenerator};

/// Failures that abort startup.
#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to connect to database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Failed to create bootstrap user: {0}")]
    Bootstrap(#[from] DomainError),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let pool = postgres::connect(&config.database).await?;
    tracing::info!("Database pool created");

    let credentials = CredentialStore::default();
    let ids = Arc::new(IdGenerator::new());
    let store = Arc::new(PostgresStore::new(pool, credentials.clone()));

    if let Some((email, password)) = config.auth.bootstrap_credentials() {
        let handler = BootstrapUserHandler::new(store.clone(), store.clone(), ids.clone());
        let command = BootstrapUserCommand {
            email: email.to_string(),
            password: password.clone(),
        };
        match handler.handle(command).await? {
            BootstrapUserResult::Created { user_id } => {
                tracing::info!(%user_id, %email, "bootstrap user created");
            }
            BootstrapUserResult::AlreadyPresent { user_id } => {
                tracing::debug!(%user_id, "bootstrap user already present");
            }
        }
    }

    let settings = ApiSettings {
        ids,
        credentials,
        token_ttl: config.auth.token_ttl(),
        request_timeout: config.server.request_timeout(),
        cors_origins: config.server.cors_origins_list(),
    };
    let app = build_app(store, settings);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "listening");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// JSON logs in production, human-readable logs elsewhere. `RUST_LOG`
/// overrides the configured filter.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let production = config.is_production();
    let json_layer = production.then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (!production).then(tracing_subscriber::fmt::layer);

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        if let Ok(mut sigterm) =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
        {
            sigterm.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
