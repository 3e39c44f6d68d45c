use actix_middleware::Recovery;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use news_service::config::{Config, LogFormat, StoreBackend};
use news_service::db::{ensure_news_tables, InMemoryNewsStore, MySqlNewsStore, NewsStore};
use news_service::handlers;
use news_service::services::NewsService;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,news_service=debug,sqlx=warn".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

async fn build_store(config: &Config) -> anyhow::Result<Arc<dyn NewsStore>> {
    match config.store.backend {
        StoreBackend::MySql => {
            config.database.log_config();
            let pool = db_pool::create_pool(config.database.clone())
                .await
                .context("Failed to create database pool")?;
            ensure_news_tables(&pool)
                .await
                .context("Failed to provision news tables")?;
            tracing::info!("Connected to MySQL via db-pool crate");
            Ok(Arc::new(MySqlNewsStore::new(pool)))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory news store; records are not persisted");
            Ok(Arc::new(InMemoryNewsStore::new()))
        }
    }
}

/// News Service
///
/// Serves `POST /edit/{id}` (partial update) and `GET /list` over the news
/// table, plus `/health` and `/health/ready` probes.
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(config.logging.format);

    tracing::info!("Starting news-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    let store = build_store(&config).await?;
    let service = web::Data::new(NewsService::with_timeout(store, config.store.timeout()));

    let (host, port) = config.bind_address();
    tracing::info!("Starting HTTP server at {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .wrap(Recovery)
            .wrap(TracingLogger::default())
            .configure(handlers::configure)
    })
    .bind((host.as_str(), port))
    .with_context(|| format!("Failed to bind {}:{}", host, port))?
    .run()
    .await?;

    tracing::info!("News-service shutting down");
    Ok(())
}
