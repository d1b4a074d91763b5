//! Wordle API server.
//!
//! Loads configuration from `WORDLE__*` environment variables, wires the
//! configured session store and word source into the HTTP router, and serves
//! until Ctrl-C.

use std::sync::Arc;

use anyhow::Context;
use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use wordle_api::adapters::{
    api_router, FixedWordSource, GameAppState, HttpWordSource, InMemorySessionStore,
    PostgresSessionStore, RedisSessionStore,
};
use wordle_api::config::{AppConfig, StoreBackend, StoreConfig, WordSourceBackend, WordSourceConfig};
use wordle_api::ports::{SessionStore, WordSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;

    init_tracing(&config);

    let store = build_store(&config.store).await?;
    let word_source = build_word_source(&config.word_source)?;

    let app = api_router(GameAppState::new(store, word_source), &config.server);

    let bind_addr = config.server.socket_addr()?;
    info!(
        %bind_addr,
        environment = ?config.server.environment,
        store = ?config.store.backend,
        word_source = ?config.word_source.backend,
        "wordle-api listening"
    );
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("wordle-api stopped");
    Ok(())
}

/// `RUST_LOG` overrides the configured filter.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn build_store(config: &StoreConfig) -> anyhow::Result<Arc<dyn SessionStore>> {
    let table = config.table_name.clone();

    match config.backend {
        StoreBackend::Memory => {
            warn!("Using in-memory session store; games are lost on restart");
            Ok(Arc::new(InMemorySessionStore::new()))
        }
        StoreBackend::Redis => {
            let redis = config
                .redis
                .as_ref()
                .context("redis settings missing for redis store")?;
            let client = redis::Client::open(redis.url.expose_secret().as_str())
                .context("invalid redis url")?;
            let conn = tokio::time::timeout(
                redis.timeout(),
                client.get_multiplexed_tokio_connection(),
            )
            .await
            .context("timed out connecting to redis")?
            .context("failed to connect to redis")?;

            Ok(Arc::new(RedisSessionStore::new(conn, table, redis.ttl_secs)))
        }
        StoreBackend::Postgres => {
            let database = config
                .database
                .as_ref()
                .context("database settings missing for postgres store")?;
            let pool = PgPoolOptions::new()
                .min_connections(database.min_connections)
                .max_connections(database.max_connections)
                .acquire_timeout(database.acquire_timeout())
                .idle_timeout(database.idle_timeout())
                .connect(database.url.expose_secret())
                .await
                .context("failed to connect to postgres")?;

            let store = PostgresSessionStore::new(pool, table);
            if database.run_migrations {
                store
                    .ensure_table()
                    .await
                    .context("failed to create games table")?;
            }
            Ok(Arc::new(store))
        }
    }
}

fn build_word_source(config: &WordSourceConfig) -> anyhow::Result<Arc<dyn WordSource>> {
    match config.backend {
        WordSourceBackend::Fixed => {
            let source = FixedWordSource::from_config(&config.words);
            info!(words = source.words().len(), "Using fixed word list");
            Ok(Arc::new(source))
        }
        WordSourceBackend::Http => {
            let api_url = config
                .api_url
                .clone()
                .context("api_url missing for http word source")?;
            let source = HttpWordSource::new(api_url, config.timeout())?;
            Ok(Arc::new(source))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
