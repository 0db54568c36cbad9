use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer as _};

use rb_api::{create_app, middleware::create_cors, AppState};
use rb_core::services::{
    AccountService, BcryptPasswordHasher, CatalogService, InputValidator, TokenService,
    TokenServiceConfig,
};
use rb_infra::{DatabasePool, MySqlAccountRepository, MySqlMovieRepository};
use rb_shared::{AppConfig, LogFormat, LoggingConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.logging);

    tracing::info!(environment = %config.environment, "Starting Reelbase API Server");

    let pool = DatabasePool::new(config.database.clone())
        .await
        .context("Failed to connect to the database")?;
    if config.database.run_migrations {
        pool.run_migrations()
            .await
            .context("Failed to apply database migrations")?;
    }
    pool.health_check()
        .await
        .context("Database health check failed")?;
    tracing::info!(stats = %pool.get_statistics(), "Database ready");

    let validator = InputValidator::new();
    let tokens = Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth)));
    let hasher = Arc::new(BcryptPasswordHasher::new(config.auth.bcrypt_cost));

    let accounts = Arc::new(AccountService::new(
        Arc::new(MySqlAccountRepository::new(pool.get_pool().clone())),
        hasher,
        Arc::clone(&tokens),
        validator,
    ));
    let catalog = Arc::new(CatalogService::new(
        Arc::new(MySqlMovieRepository::new(pool.get_pool().clone())),
        validator,
    ));
    let state = web::Data::new(AppState::new(accounts, catalog, tokens));

    let server_config = config.server.clone();
    let cors_config = config.cors.clone();
    let bind_address = server_config.bind_address();
    tracing::info!(%bind_address, "Server will bind");

    let max_payload_size = server_config.max_payload_size;
    let mut server = HttpServer::new(move || {
        create_app(state.clone(), max_payload_size)
            .wrap(create_cors(&cors_config))
            .wrap(TracingLogger::default())
    })
    .keep_alive(Duration::from_secs(server_config.keep_alive));

    if server_config.workers > 0 {
        server = server.workers(server_config.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await?;

    tracing::info!("Server stopped, closing database pool");
    pool.close().await;
    Ok(())
}

/// Install the global subscriber; `RUST_LOG` overrides the configured level
fn init_tracing(config: &LoggingConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let fmt_layer = match config.format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_file(config.source_location)
            .with_line_number(config.source_location)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .pretty()
            .with_file(config.source_location)
            .with_line_number(config.source_location)
            .boxed(),
        LogFormat::Compact => tracing_subscriber::fmt::layer().compact().boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
