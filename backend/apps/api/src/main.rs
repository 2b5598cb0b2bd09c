//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request errors are rendered by the
//! auth crate through `kernel::error::AppError`.

mod config;

use auth::{CredentialService, PgCredentialRepository, credential_router};
use platform::password::PasswordHasherService;
use platform::token::TokenIssuer;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let hasher = PasswordHasherService::new(config.hash_cost)?;
    let issuer = TokenIssuer::new(&config.token_secret);

    tracing::info!(
        memory_kib = config.hash_cost.memory_kib,
        iterations = config.hash_cost.iterations,
        parallelism = config.hash_cost.parallelism,
        session_ttl_secs = config.auth.session_ttl.num_seconds(),
        reset_disclosure = ?config.auth.reset_disclosure,
        "Credential service configured"
    );

    let service = CredentialService::new(
        PgCredentialRepository::new(pool),
        hasher,
        issuer,
        config.auth,
    );

    // Build router
    let app = credential_router(service).layer(TraceLayer::new_for_http());

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
