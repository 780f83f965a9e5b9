//! Server: loads config, prepares the record store, mounts customer and common routes.

use customer_service::{
    app, apply_migrations, ensure_database_exists, load_from_env, AppState, CustomerService,
    CustomerStore, MemoryCustomerStore, PgCustomerStore, StoreKind,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("customer_service=info,tower_http=info")),
        )
        .init();

    let config = load_from_env()?;

    let store: Arc<dyn CustomerStore> = match config.store {
        StoreKind::Postgres => {
            ensure_database_exists(&config.database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.database_url)
                .await?;
            apply_migrations(&pool, &config.schema).await?;
            Arc::new(PgCustomerStore::new(pool, &config.schema))
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory store; data is lost on restart");
            Arc::new(MemoryCustomerStore::new())
        }
    };

    let state = AppState::new(CustomerService::new(store));

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
